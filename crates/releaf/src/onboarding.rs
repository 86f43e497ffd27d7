//! Single-user onboarding.
//!
//! Turns a person's name and a geocoded place into a user record, a planting
//! location and a handful of strictly matched recommendations. Geocoding
//! happens upstream; the request carries resolved coordinates.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

use crate::catalog::SpeciesCatalog;
use crate::error::OnboardingError;
use crate::fakes::FakeLocale;
use crate::ids::random_uuid;
use crate::location::{Aspect, Coordinates, Location, round_to};
use crate::recommendation::{Recommendation, RecommendationContext, generate_recommendations};
use crate::suitability::{MatchPolicy, filter_suitable_species};
use crate::user::{SignupSource, UserRecord, UserType};
use crate::zone::estimate_hardiness_zone;

/// Soil descriptors assumed for a freshly onboarded site.
pub const ONBOARDING_SOIL_TYPES: [&str; 3] =
    ["well-drained", "moist well-drained", "sandy well-drained"];

/// Domain used for generated email addresses.
const EMAIL_DOMAIN: &str = "example.com";

const MAX_ELEVATION_M: u16 = 1000;
const MAX_SLOPE_DEG: f64 = 15.0;
const SUNLIGHT_RANGE: (f64, f64) = (6.0, 10.0);
const ONE_DECIMAL: i32 = 1;

/// A person asking for tree recommendations at a place.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingRequest {
    /// Display name, e.g. `"Ada Lovelace"`.
    pub name: String,
    /// Human-readable place the coordinates were resolved from.
    pub location_label: String,
    /// Resolved coordinates of the place.
    pub coordinates: Coordinates,
    /// When the request was received.
    pub requested_at: DateTime<Utc>,
}

/// Records produced by one onboarding request.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingOutcome {
    /// The new user.
    pub user: UserRecord,
    /// The user's planting location.
    pub location: Location,
    /// Recommendations for the location, possibly empty.
    pub recommendations: Vec<Recommendation>,
}

/// Onboards one user.
///
/// # Errors
///
/// Returns [`OnboardingError`] when the name or location label is blank or
/// the coordinates are out of range.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use releaf::{Coordinates, OnboardingRequest, SpeciesCatalog, onboard_user};
///
/// let catalog = SpeciesCatalog::from_csv_str("\
/// species_name,common_name,min_zone,max_zone,ideal_soil,drought_tolerant,max_height_m,growth_rate,canopy_spread_m
/// Ficus benghalensis,Banyan,10,12,well-drained,True,25,fast,100
/// ").expect("valid catalog");
/// let request = OnboardingRequest {
///     name: "Wangari Maathai".to_owned(),
///     location_label: "Nairobi".to_owned(),
///     coordinates: Coordinates::new(-1.29, 36.82),
///     requested_at: Utc::now(),
/// };
///
/// let outcome = onboard_user(&request, &catalog, &mut ChaCha8Rng::seed_from_u64(1))
///     .expect("onboarded");
/// assert_eq!(outcome.user.email, "wangari.maathai@example.com");
/// assert_eq!(outcome.recommendations.len(), 1);
/// ```
pub fn onboard_user<R>(
    request: &OnboardingRequest,
    catalog: &SpeciesCatalog,
    rng: &mut R,
) -> Result<OnboardingOutcome, OnboardingError>
where
    R: Rng + ?Sized,
{
    let email = email_for(&request.name).ok_or(OnboardingError::BlankName)?;
    let address = request.location_label.trim();
    if address.is_empty() {
        return Err(OnboardingError::BlankLocationLabel);
    }
    let coordinates = request.coordinates;
    if !coordinates.is_valid() {
        return Err(OnboardingError::InvalidCoordinates {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        });
    }

    let user = UserRecord {
        user_id: random_uuid(rng),
        email,
        created_at: request.requested_at,
        last_login: None,
        zip_code: Some(FakeLocale::English.postcode(rng)),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        user_type: UserType::Individual,
        source: SignupSource::ManualOnboarding,
    };
    let location = Location {
        location_id: random_uuid(rng),
        user_id: user.user_id,
        address: Some(address.to_owned()),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        elevation_m: Some(rng.random_range(0..=MAX_ELEVATION_M)),
        aspect: Aspect::ALL.choose(rng).copied().unwrap_or(Aspect::Flat),
        slope_deg: Some(round_to(rng.random_range(0.0..=MAX_SLOPE_DEG), ONE_DECIMAL)),
        soil_type: ONBOARDING_SOIL_TYPES
            .choose(rng)
            .map_or_else(String::new, |soil| (*soil).to_owned()),
        sunlight_hours: round_to(
            rng.random_range(SUNLIGHT_RANGE.0..=SUNLIGHT_RANGE.1),
            ONE_DECIMAL,
        ),
        hardiness_zone: estimate_hardiness_zone(coordinates.latitude, rng),
        is_verified: false,
    };
    info!(
        user_id = %user.user_id,
        zone = %location.hardiness_zone,
        soil = %location.soil_type,
        "onboarding user"
    );

    let suitable = filter_suitable_species(catalog.species(), &location, MatchPolicy::Strict);
    let context = RecommendationContext {
        user_id: user.user_id,
        generated_at: request.requested_at,
    };
    let recommendations = generate_recommendations(&suitable, &location, &context, rng);

    Ok(OnboardingOutcome {
        user,
        location,
        recommendations,
    })
}

/// Builds `first.last@example.com` from a display name.
///
/// Returns `None` for a blank name.
fn email_for(name: &str) -> Option<String> {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    (!local.is_empty()).then(|| format!("{local}@{EMAIL_DOMAIN}"))
}
