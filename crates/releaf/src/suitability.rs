//! Species suitability filtering.
//!
//! Two policies share the same building blocks:
//!
//! - [`MatchPolicy::Strict`] is used when onboarding a single user. Species
//!   must cover the location's zone exactly.
//! - [`MatchPolicy::Tolerant`] is used by the dataset builder. When too few
//!   species cover the zone exactly it widens the range by one zone on each
//!   side, producing denser demo data.
//!
//! Both policies then narrow large candidate sets by soil: if more than
//! [`SOIL_REFINEMENT_THRESHOLD`] species remain and the location has a soil
//! description, species whose soil text contains its first word are
//! preferred, provided enough of them remain.

use crate::location::Location;
use crate::species::Species;

/// Candidate count above which the soil refinement is attempted.
pub const SOIL_REFINEMENT_THRESHOLD: usize = 10;

/// Minimum soil matches the strict policy needs to apply the refinement.
pub const STRICT_MIN_SOIL_MATCHES: usize = 3;

/// Exact zone matches below which the tolerant policy widens its range.
pub const TOLERANT_MIN_EXACT_MATCHES: usize = 5;

/// Zones added on each side of the range by the tolerant policy.
pub const TOLERANT_ZONE_TOLERANCE: u8 = 1;

/// How strictly species are matched against a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Exact zone matching; soil refinement kept when at least
    /// [`STRICT_MIN_SOIL_MATCHES`] species remain.
    Strict,
    /// Exact zone matching with a one-zone fallback when fewer than
    /// [`TOLERANT_MIN_EXACT_MATCHES`] species match; soil refinement kept
    /// when at least `min_soil_matches` species remain.
    Tolerant {
        /// Soil matches required to keep the refinement, usually the number
        /// of recommendations wanted for the location.
        min_soil_matches: usize,
    },
}

/// Returns the species suitable for a location under the given policy.
///
/// The result preserves catalog order and borrows from `catalog`. An empty
/// result is valid and means nothing can be recommended.
///
/// # Example
///
/// ```
/// # use releaf::{Aspect, GrowthRate, HardinessZone, Location, MatchPolicy, Species};
/// # use releaf::filter_suitable_species;
/// # use uuid::Uuid;
/// # let species = |min_zone: u8, max_zone: u8| Species {
/// #     species_id: Uuid::new_v4(),
/// #     species_name: "Tilia cordata".to_owned(),
/// #     common_name: "Littleleaf Linden".to_owned(),
/// #     min_zone,
/// #     max_zone,
/// #     ideal_soil: "moist well-drained".to_owned(),
/// #     drought_tolerant: false,
/// #     max_height_m: 20.0,
/// #     growth_rate: GrowthRate::Medium,
/// #     canopy_spread_m: 10.0,
/// # };
/// # let location = Location {
/// #     location_id: Uuid::nil(),
/// #     user_id: Uuid::nil(),
/// #     address: None,
/// #     latitude: 40.0,
/// #     longitude: -75.0,
/// #     elevation_m: None,
/// #     aspect: Aspect::Flat,
/// #     slope_deg: None,
/// #     soil_type: "moist".to_owned(),
/// #     sunlight_hours: 7.5,
/// #     hardiness_zone: HardinessZone::new(6).expect("zone"),
/// #     is_verified: false,
/// # };
/// let catalog = vec![species(3, 7), species(8, 10)];
/// let suitable = filter_suitable_species(&catalog, &location, MatchPolicy::Strict);
/// assert_eq!(suitable.len(), 1);
/// ```
#[must_use]
pub fn filter_suitable_species<'a>(
    catalog: &'a [Species],
    location: &Location,
    policy: MatchPolicy,
) -> Vec<&'a Species> {
    let (zone_matches, min_soil_matches) = match policy {
        MatchPolicy::Strict => (
            species_within_zone(catalog, location, 0),
            STRICT_MIN_SOIL_MATCHES,
        ),
        MatchPolicy::Tolerant { min_soil_matches } => {
            (tolerant_zone_matches(catalog, location), min_soil_matches)
        }
    };

    refine_by_soil(zone_matches, location, min_soil_matches)
}

fn species_within_zone<'a>(
    catalog: &'a [Species],
    location: &Location,
    tolerance: u8,
) -> Vec<&'a Species> {
    catalog
        .iter()
        .filter(|species| species.supports_zone_within(location.hardiness_zone, tolerance))
        .collect()
}

fn tolerant_zone_matches<'a>(catalog: &'a [Species], location: &Location) -> Vec<&'a Species> {
    let exact = species_within_zone(catalog, location, 0);
    if exact.len() >= TOLERANT_MIN_EXACT_MATCHES {
        return exact;
    }
    species_within_zone(catalog, location, TOLERANT_ZONE_TOLERANCE)
}

fn refine_by_soil<'a>(
    candidates: Vec<&'a Species>,
    location: &Location,
    min_soil_matches: usize,
) -> Vec<&'a Species> {
    if candidates.len() <= SOIL_REFINEMENT_THRESHOLD {
        return candidates;
    }
    let Some(token) = location.soil_token() else {
        return candidates;
    };

    let soil_matches: Vec<&Species> = candidates
        .iter()
        .copied()
        .filter(|species| species.prefers_soil(token))
        .collect();

    if soil_matches.len() >= min_soil_matches {
        soil_matches
    } else {
        candidates
    }
}
