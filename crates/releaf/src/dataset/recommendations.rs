//! Recommendations for synthetic locations under the tolerant policy.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::ids::random_uuid;
use crate::location::Location;
use crate::recommendation::{Recommendation, RecommendationContext, sample_species};
use crate::species::Species;
use crate::suitability::{MatchPolicy, filter_suitable_species};
use crate::weighted::choose_weighted;

const RECOMMENDATIONS_PER_LOCATION: [(usize, u32); 5] =
    [(1, 20), (2, 30), (3, 25), (4, 15), (5, 10)];

/// Recommendations are backdated by up to this many whole days.
const MAX_AGE_DAYS: i64 = 90;

/// Generates recommendations for one synthetic location.
///
/// Each record gets its own backdated timestamp, so one location's
/// recommendations may span several days.
pub(super) fn recommend_for_location(
    catalog: &[Species],
    location: &Location,
    reference_time: DateTime<Utc>,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Recommendation>, GenerationError> {
    let target = *choose_weighted(
        "recommendations_per_location",
        &RECOMMENDATIONS_PER_LOCATION,
        rng,
    )?;
    let suitable = filter_suitable_species(
        catalog,
        location,
        MatchPolicy::Tolerant {
            min_soil_matches: target,
        },
    );

    sample_species(&suitable, target, rng)
        .into_iter()
        .map(|species| -> Result<Recommendation, GenerationError> {
            let context = RecommendationContext {
                user_id: location.user_id,
                generated_at: days_before(reference_time, rng)?,
            };
            Ok(Recommendation::score(
                random_uuid(rng),
                species,
                location,
                &context,
            ))
        })
        .collect()
}

fn days_before(
    reference_time: DateTime<Utc>,
    rng: &mut ChaCha8Rng,
) -> Result<DateTime<Utc>, GenerationError> {
    let days = rng.random_range(0..=MAX_AGE_DAYS);
    TimeDelta::try_days(days)
        .and_then(|delta| reference_time.checked_sub_signed(delta))
        .ok_or(GenerationError::TimestampOutOfRange {
            offset_seconds: days.saturating_mul(86_400),
        })
}
