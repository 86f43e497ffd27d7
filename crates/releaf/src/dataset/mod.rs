//! Seeded synthetic dataset generation.
//!
//! A dataset is built in three passes: users, then their locations, then
//! recommendations for every location. Each pass draws from a single
//! [`ChaCha8Rng`] seeded from the [`SeedDefinition`], so the same seed,
//! catalog and reference time always produce the same records.

mod locations;
mod recommendations;
mod summary;
mod users;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::catalog::SpeciesCatalog;
use crate::error::GenerationError;
use crate::location::Location;
use crate::recommendation::Recommendation;
use crate::registry::SeedDefinition;
use crate::user::UserRecord;
use locations::generate_locations;
use recommendations::recommend_for_location;
use users::generate_user;

pub use locations::SOIL_TYPES;
pub use summary::DatasetSummary;

/// Users, locations and recommendations generated from one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDataset {
    /// Name of the seed the dataset was generated from.
    pub seed_name: String,
    /// Generated users.
    pub users: Vec<UserRecord>,
    /// Generated locations, grouped by user in generation order.
    pub locations: Vec<Location>,
    /// Generated recommendations, grouped by location in generation order.
    pub recommendations: Vec<Recommendation>,
}

impl SyntheticDataset {
    /// Summarises the dataset.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::from_dataset(self)
    }
}

/// Generates a dataset from a seed definition.
///
/// Timestamps are placed relative to `reference_time` rather than the wall
/// clock.
///
/// # Errors
///
/// Returns [`GenerationError`] if a weight table is unusable or a timestamp
/// would fall outside the supported date range.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use releaf::{SeedDefinition, SpeciesCatalog, build_dataset};
///
/// let catalog = SpeciesCatalog::from_csv_str("\
/// species_name,common_name,min_zone,max_zone,ideal_soil,drought_tolerant,max_height_m,growth_rate,canopy_spread_m
/// Quercus robur,English Oak,4,8,deep well-drained,False,35,slow,25
/// ").expect("valid catalog");
/// let seed = SeedDefinition::new("doc".to_owned(), 7, 4);
/// let reference = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().expect("timestamp");
///
/// let dataset = build_dataset(&catalog, &seed, reference).expect("dataset");
/// assert_eq!(dataset.users.len(), 4);
/// assert_eq!(dataset, build_dataset(&catalog, &seed, reference).expect("dataset"));
/// ```
pub fn build_dataset(
    catalog: &SpeciesCatalog,
    seed_def: &SeedDefinition,
    reference_time: DateTime<Utc>,
) -> Result<SyntheticDataset, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());

    let users = (0..seed_def.user_count())
        .map(|_| generate_user(&mut rng, reference_time))
        .collect::<Result<Vec<_>, _>>()?;

    let mut locations = Vec::with_capacity(users.len());
    for user in &users {
        locations.extend(generate_locations(user, &mut rng)?);
    }

    let mut recommendations = Vec::new();
    for location in &locations {
        recommendations.extend(recommend_for_location(
            catalog.species(),
            location,
            reference_time,
            &mut rng,
        )?);
    }

    info!(
        seed = seed_def.name(),
        users = users.len(),
        locations = locations.len(),
        recommendations = recommendations.len(),
        "generated synthetic dataset"
    );

    Ok(SyntheticDataset {
        seed_name: seed_def.name().to_owned(),
        users,
        locations,
        recommendations,
    })
}
