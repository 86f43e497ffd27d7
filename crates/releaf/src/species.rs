//! Tree species records.
//!
//! A [`Species`] is one row of the species catalog. Species are immutable
//! once loaded and are shared read-only between filtering, scoring and
//! generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::zone::HardinessZone;

/// Relative growth speed of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthRate {
    /// Reaches maturity quickly.
    Fast,
    /// Average growth speed.
    Medium,
    /// Reaches maturity slowly.
    Slow,
}

impl GrowthRate {
    /// Returns the lowercase label used in the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Medium => "medium",
            Self::Slow => "slow",
        }
    }
}

impl fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a growth rate label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown growth rate '{0}'")]
pub struct UnknownGrowthRate(pub String);

impl FromStr for GrowthRate {
    type Err = UnknownGrowthRate;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "medium" => Ok(Self::Medium),
            "slow" => Ok(Self::Slow),
            _ => Err(UnknownGrowthRate(value.to_owned())),
        }
    }
}

/// A tree species from the catalog.
///
/// `min_zone` and `max_zone` are kept as raw integers so that a row with an
/// inverted range can still be carried through the catalog; such a species
/// never matches any location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Unique identifier for the species.
    pub species_id: Uuid,
    /// Scientific name.
    pub species_name: String,
    /// Common name.
    pub common_name: String,
    /// Coldest supported hardiness zone.
    pub min_zone: u8,
    /// Warmest supported hardiness zone.
    pub max_zone: u8,
    /// Preferred soil description, e.g. `"moist well-drained"`.
    pub ideal_soil: String,
    /// Whether the species tolerates drought.
    pub drought_tolerant: bool,
    /// Mature height in metres.
    pub max_height_m: f64,
    /// Relative growth speed.
    pub growth_rate: GrowthRate,
    /// Mature canopy spread in metres.
    pub canopy_spread_m: f64,
}

impl Species {
    /// Returns `true` when `min_zone <= max_zone`.
    #[must_use]
    pub const fn has_valid_zone_range(&self) -> bool {
        self.min_zone <= self.max_zone
    }

    /// Returns `true` when the zone lies inside the species' zone range.
    #[must_use]
    pub const fn supports_zone(&self, zone: HardinessZone) -> bool {
        self.supports_zone_within(zone, 0)
    }

    /// Returns `true` when the zone lies inside the species' zone range
    /// widened by `tolerance` zones on either side.
    ///
    /// Species with an inverted range never match, whatever the tolerance.
    #[must_use]
    pub const fn supports_zone_within(&self, zone: HardinessZone, tolerance: u8) -> bool {
        let value = zone.get();
        self.has_valid_zone_range()
            && self.min_zone <= value.saturating_add(tolerance)
            && self.max_zone >= value.saturating_sub(tolerance)
    }

    /// Returns `true` when the species' soil description contains `token`.
    ///
    /// The match is a case-sensitive substring test.
    #[must_use]
    pub fn prefers_soil(&self, token: &str) -> bool {
        self.ideal_soil.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn zone(value: u8) -> HardinessZone {
        HardinessZone::new(value).expect("valid zone")
    }

    #[fixture]
    fn red_maple() -> Species {
        Species {
            species_id: Uuid::nil(),
            species_name: "Acer rubrum".to_owned(),
            common_name: "Red Maple".to_owned(),
            min_zone: 3,
            max_zone: 9,
            ideal_soil: "moist well-drained".to_owned(),
            drought_tolerant: false,
            max_height_m: 25.0,
            growth_rate: GrowthRate::Fast,
            canopy_spread_m: 12.0,
        }
    }

    #[rstest]
    #[case(2, false)]
    #[case(3, true)]
    #[case(6, true)]
    #[case(9, true)]
    #[case(10, false)]
    fn supports_zone_is_inclusive(red_maple: Species, #[case] value: u8, #[case] expected: bool) {
        assert_eq!(red_maple.supports_zone(zone(value)), expected);
    }

    #[rstest]
    #[case(2, true)]
    #[case(10, true)]
    #[case(1, false)]
    #[case(11, false)]
    fn tolerance_widens_range_by_one(
        red_maple: Species,
        #[case] value: u8,
        #[case] expected: bool,
    ) {
        assert_eq!(red_maple.supports_zone_within(zone(value), 1), expected);
    }

    #[rstest]
    fn inverted_range_never_matches(mut red_maple: Species) {
        red_maple.min_zone = 7;
        red_maple.max_zone = 6;

        assert!(!red_maple.has_valid_zone_range());
        for value in 1..=12 {
            assert!(!red_maple.supports_zone(zone(value)));
            assert!(!red_maple.supports_zone_within(zone(value), 1));
        }
    }

    #[rstest]
    fn soil_match_is_case_sensitive_substring(red_maple: Species) {
        assert!(red_maple.prefers_soil("moist"));
        assert!(red_maple.prefers_soil("well-drained"));
        assert!(!red_maple.prefers_soil("Moist"));
        assert!(!red_maple.prefers_soil("sandy"));
    }

    #[rstest]
    #[case("fast", GrowthRate::Fast)]
    #[case("Medium", GrowthRate::Medium)]
    #[case(" slow ", GrowthRate::Slow)]
    fn growth_rate_parses_labels(#[case] raw: &str, #[case] expected: GrowthRate) {
        assert_eq!(raw.parse::<GrowthRate>(), Ok(expected));
    }

    #[test]
    fn growth_rate_rejects_unknown_label() {
        assert_eq!(
            "glacial".parse::<GrowthRate>(),
            Err(UnknownGrowthRate("glacial".to_owned()))
        );
    }

    #[test]
    fn unknown_growth_rate_names_the_label() {
        let err = "glacial".parse::<GrowthRate>().expect_err("unknown label");
        assert_eq!(err.to_string(), "unknown growth rate 'glacial'");
    }

    #[test]
    fn growth_rate_serializes_lowercase() {
        let json = serde_json::to_string(&GrowthRate::Medium).expect("serialize");
        assert_eq!(json, "\"medium\"");
    }
}
