//! Tree species matching and deterministic demo data for releaf.
//!
//! Given a planting location, this crate estimates its hardiness zone,
//! filters a species catalog down to the trees that can grow there, scores
//! each candidate and produces recommendation records. The same rules drive
//! a seeded generator that fills a demo database with believable users,
//! locations and recommendations.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading tree species catalogs from CSV
//! - Estimating hardiness zones from latitude
//! - Strict and tolerant suitability matching
//! - Confidence scoring and recommendation generation
//! - Onboarding a single user from a geocoded place
//! - Seeded synthetic datasets named in a JSON registry, exported as CSV
//!
//! All randomised operations take an injected [`rand::Rng`], so results are
//! reproducible with a seeded generator.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use releaf::{MatchPolicy, SpeciesCatalog, estimate_hardiness_zone, filter_suitable_species};
//! # use releaf::{Aspect, Location};
//! # use uuid::Uuid;
//!
//! let catalog = SpeciesCatalog::from_csv_str("\
//! species_name,common_name,min_zone,max_zone,ideal_soil,drought_tolerant,max_height_m,growth_rate,canopy_spread_m
//! Quercus rubra,Northern Red Oak,3,8,well-drained acidic,False,25,medium,20
//! Washingtonia robusta,Mexican Fan Palm,9,11,sandy well-drained,True,30,fast,4
//! ").expect("valid catalog");
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let zone = estimate_hardiness_zone(48.0, &mut rng);
//! # let location = Location {
//! #     location_id: Uuid::nil(),
//! #     user_id: Uuid::nil(),
//! #     address: None,
//! #     latitude: 48.0,
//! #     longitude: 11.5,
//! #     elevation_m: None,
//! #     aspect: Aspect::Flat,
//! #     slope_deg: None,
//! #     soil_type: "well-drained".to_owned(),
//! #     sunlight_hours: 7.0,
//! #     hardiness_zone: zone,
//! #     is_verified: false,
//! # };
//!
//! let suitable = filter_suitable_species(catalog.species(), &location, MatchPolicy::Strict);
//! assert_eq!(suitable.len(), 1);
//! ```

mod atomic_io;
mod catalog;
mod confidence;
mod config;
mod dataset;
mod error;
mod export;
mod fakes;
mod ids;
mod location;
mod onboarding;
mod pipeline;
mod recommendation;
mod registry;
mod species;
mod suitability;
mod user;
mod weighted;
mod zone;

pub use catalog::SpeciesCatalog;
pub use confidence::{
    BASE_CONFIDENCE, GROWTH_RATE_ADJUSTMENT, MAX_CONFIDENCE, MIN_CONFIDENCE, SOIL_MATCH_BONUS,
    ZONE_MATCH_BONUS, score_confidence,
};
pub use config::GeneratorSettings;
pub use dataset::{DatasetSummary, SOIL_TYPES, SyntheticDataset, build_dataset};
pub use error::{
    CatalogError, ExportError, GenerationError, GeneratorError, OnboardingError, RegistryError,
    ZoneError,
};
pub use export::{LOCATIONS_FILE, RECOMMENDATIONS_FILE, USERS_FILE, export_dataset};
pub use location::{Aspect, Coordinates, Location};
pub use onboarding::{ONBOARDING_SOIL_TYPES, OnboardingOutcome, OnboardingRequest, onboard_user};
pub use pipeline::{GenerationReport, run_generator};
pub use recommendation::{
    MAX_ONBOARDING_RECOMMENDATIONS, MIN_ONBOARDING_RECOMMENDATIONS, Recommendation,
    RecommendationContext, generate_recommendations, sample_species,
};
pub use registry::{SeedDefinition, SeedRegistry};
pub use species::{GrowthRate, Species, UnknownGrowthRate};
pub use suitability::{
    MatchPolicy, SOIL_REFINEMENT_THRESHOLD, STRICT_MIN_SOIL_MATCHES, TOLERANT_MIN_EXACT_MATCHES,
    TOLERANT_ZONE_TOLERANCE, filter_suitable_species,
};
pub use user::{SignupSource, UserRecord, UserType};
pub use zone::{HardinessZone, MAX_ZONE, MIN_ZONE, estimate_hardiness_zone, zone_band};
