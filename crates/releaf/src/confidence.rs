//! Confidence scoring for a species at a location.
//!
//! The score is an additive heuristic: a base value, a bonus when the
//! location's zone is inside the species' range, a bonus when the first word
//! of the location soil appears in the species' soil preference, and a small
//! nudge for growth speed. The sum is clamped to
//! [`MIN_CONFIDENCE`]..=[`MAX_CONFIDENCE`] and rounded to three decimals.

use crate::location::{Location, round_to};
use crate::species::{GrowthRate, Species};

/// Starting confidence before any rule applies.
pub const BASE_CONFIDENCE: f64 = 0.5;

/// Added when the location zone is inside the species' zone range.
pub const ZONE_MATCH_BONUS: f64 = 0.3;

/// Added when the location soil token appears in the species' soil text.
pub const SOIL_MATCH_BONUS: f64 = 0.15;

/// Added for fast growers and subtracted for slow growers.
pub const GROWTH_RATE_ADJUSTMENT: f64 = 0.05;

/// Lowest score ever returned.
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Highest score ever returned.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Decimal places kept for persisted scores.
const SCORE_DECIMALS: i32 = 3;

/// Scores how well a species suits a location.
///
/// The result always lies in [`MIN_CONFIDENCE`]..=[`MAX_CONFIDENCE`] and is
/// rounded to three decimal places.
///
/// # Example
///
/// ```
/// # use releaf::{Aspect, GrowthRate, HardinessZone, Location, Species, score_confidence};
/// # use uuid::Uuid;
/// let species = Species {
///     species_id: Uuid::nil(),
///     species_name: "Pinus banksiana".to_owned(),
///     common_name: "Jack Pine".to_owned(),
///     min_zone: 5,
///     max_zone: 7,
///     ideal_soil: "sandy well-drained".to_owned(),
///     drought_tolerant: true,
///     max_height_m: 20.0,
///     growth_rate: GrowthRate::Fast,
///     canopy_spread_m: 8.0,
/// };
/// let location = Location {
///     location_id: Uuid::nil(),
///     user_id: Uuid::nil(),
///     address: None,
///     latitude: 44.0,
///     longitude: -93.0,
///     elevation_m: None,
///     aspect: Aspect::South,
///     slope_deg: None,
///     soil_type: "sandy loam".to_owned(),
///     sunlight_hours: 8.0,
///     hardiness_zone: HardinessZone::new(6).expect("zone"),
///     is_verified: false,
/// };
///
/// // 0.5 + 0.3 + 0.15 + 0.05 clamps to the ceiling.
/// assert_eq!(score_confidence(&species, &location), 0.95);
/// ```
#[must_use]
pub fn score_confidence(species: &Species, location: &Location) -> f64 {
    round_to(unrounded_confidence(species, location), SCORE_DECIMALS)
}

#[expect(clippy::float_arithmetic, reason = "the score is an additive heuristic")]
fn unrounded_confidence(species: &Species, location: &Location) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if species.supports_zone(location.hardiness_zone) {
        confidence += ZONE_MATCH_BONUS;
    }

    if location
        .soil_token()
        .is_some_and(|token| species.prefers_soil(token))
    {
        confidence += SOIL_MATCH_BONUS;
    }

    match species.growth_rate {
        GrowthRate::Fast => confidence += GROWTH_RATE_ADJUSTMENT,
        GrowthRate::Medium => {}
        GrowthRate::Slow => confidence -= GROWTH_RATE_ADJUSTMENT,
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
