//! Recommendation records and per-request generation.
//!
//! A generation pass draws species uniformly at random, without replacement,
//! from a suitable pool and scores each draw. The number of draws is capped
//! by the pool size, so an empty pool yields no recommendations rather than
//! an error.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::confidence::score_confidence;
use crate::ids::random_uuid;
use crate::location::Location;
use crate::species::Species;

/// Fewest recommendations targeted for an onboarding request.
pub const MIN_ONBOARDING_RECOMMENDATIONS: usize = 3;

/// Most recommendations targeted for an onboarding request.
pub const MAX_ONBOARDING_RECOMMENDATIONS: usize = 5;

/// A scored species recommendation for one location.
///
/// Persistence layers insert these keyed by `recommendation_id` and ignore
/// rows that already exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Unique identifier for the recommendation.
    pub recommendation_id: Uuid,
    /// User the recommendation belongs to.
    pub user_id: Uuid,
    /// Location the species was matched against.
    pub location_id: Uuid,
    /// Recommended species.
    pub species_id: Uuid,
    /// When the recommendation was produced.
    pub generated_at: DateTime<Utc>,
    /// Confidence score between 0.1 and 0.95, three decimals.
    pub confidence_score: f64,
    /// Scientific name of the species, for display.
    pub species_name: String,
    /// Common name of the species, for display.
    pub common_name: String,
}

impl Recommendation {
    /// Scores `species` against `location` and builds a record for it.
    #[must_use]
    pub fn score(
        recommendation_id: Uuid,
        species: &Species,
        location: &Location,
        context: &RecommendationContext,
    ) -> Self {
        Self {
            recommendation_id,
            user_id: context.user_id,
            location_id: location.location_id,
            species_id: species.species_id,
            generated_at: context.generated_at,
            confidence_score: score_confidence(species, location),
            species_name: species.species_name.clone(),
            common_name: species.common_name.clone(),
        }
    }
}

/// Caller-supplied details stamped onto every generated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationContext {
    /// User who owns the location.
    pub user_id: Uuid,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// Draws up to `count` species uniformly at random without replacement.
///
/// Returns fewer than `count` species when the pool is smaller; the result
/// never contains the same pool entry twice.
pub fn sample_species<'a, R>(pool: &[&'a Species], count: usize, rng: &mut R) -> Vec<&'a Species>
where
    R: Rng + ?Sized,
{
    let mut remaining = pool.to_vec();
    let mut drawn = Vec::with_capacity(count.min(remaining.len()));

    while drawn.len() < count && !remaining.is_empty() {
        let index = rng.random_range(0..remaining.len());
        drawn.push(remaining.swap_remove(index));
    }

    drawn
}

/// Generates recommendations for one onboarding request.
///
/// Targets a uniformly chosen count between
/// [`MIN_ONBOARDING_RECOMMENDATIONS`] and [`MAX_ONBOARDING_RECOMMENDATIONS`],
/// capped by the number of suitable species. Records are returned in draw
/// order and the first one is logged as the top pick.
///
/// # Example
///
/// ```
/// # use chrono::Utc;
/// # use rand::SeedableRng;
/// # use rand_chacha::ChaCha8Rng;
/// # use releaf::{Aspect, HardinessZone, Location, RecommendationContext};
/// # use releaf::generate_recommendations;
/// # use uuid::Uuid;
/// # let location = Location {
/// #     location_id: Uuid::nil(),
/// #     user_id: Uuid::nil(),
/// #     address: None,
/// #     latitude: 9.0,
/// #     longitude: 0.0,
/// #     elevation_m: None,
/// #     aspect: Aspect::Flat,
/// #     slope_deg: None,
/// #     soil_type: String::new(),
/// #     sunlight_hours: 8.0,
/// #     hardiness_zone: HardinessZone::new(9).expect("zone"),
/// #     is_verified: false,
/// # };
/// let context = RecommendationContext {
///     user_id: location.user_id,
///     generated_at: Utc::now(),
/// };
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let recommendations = generate_recommendations(&[], &location, &context, &mut rng);
/// assert!(recommendations.is_empty());
/// ```
pub fn generate_recommendations<R>(
    suitable: &[&Species],
    location: &Location,
    context: &RecommendationContext,
    rng: &mut R,
) -> Vec<Recommendation>
where
    R: Rng + ?Sized,
{
    let target = rng.random_range(MIN_ONBOARDING_RECOMMENDATIONS..=MAX_ONBOARDING_RECOMMENDATIONS);
    let chosen = sample_species(suitable, target, rng);

    let recommendations: Vec<Recommendation> = chosen
        .into_iter()
        .map(|species| Recommendation::score(random_uuid(rng), species, location, context))
        .collect();

    info!(
        location_id = %location.location_id,
        count = recommendations.len(),
        "generated tree recommendations"
    );
    if let Some(top) = recommendations.first() {
        info!(
            common_name = %top.common_name,
            confidence = top.confidence_score,
            "top recommendation"
        );
    }

    recommendations
}
