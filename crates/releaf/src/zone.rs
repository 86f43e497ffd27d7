//! Hardiness zone type and latitude-based zone estimation.
//!
//! Zones are estimated from latitude alone: the absolute latitude selects a
//! climate band and a zone is drawn uniformly from the band's zone range. The
//! estimate is deliberately coarse; it stands in for real climate data when
//! only coordinates are known.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ZoneError;

/// Lowest supported hardiness zone.
pub const MIN_ZONE: u8 = 1;

/// Highest supported hardiness zone.
pub const MAX_ZONE: u8 = 12;

/// A USDA-style hardiness zone between [`MIN_ZONE`] and [`MAX_ZONE`].
///
/// # Example
///
/// ```
/// use releaf::HardinessZone;
///
/// let zone = HardinessZone::new(6).expect("zone in range");
/// assert_eq!(zone.get(), 6);
/// assert!(HardinessZone::new(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HardinessZone(u8);

impl HardinessZone {
    /// Creates a zone, rejecting values outside 1-12.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::OutOfRange`] when `value` is not a supported
    /// zone.
    pub const fn new(value: u8) -> Result<Self, ZoneError> {
        if value >= MIN_ZONE && value <= MAX_ZONE {
            Ok(Self(value))
        } else {
            Err(ZoneError::OutOfRange { value })
        }
    }

    /// Returns the numeric zone.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HardinessZone {
    type Error = ZoneError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HardinessZone> for u8 {
    fn from(zone: HardinessZone) -> Self {
        zone.0
    }
}

impl fmt::Display for HardinessZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Latitude bands ordered from the equator outwards.
///
/// Each entry pairs the inclusive upper bound on absolute latitude with the
/// zones a location in that band may fall into.
const ZONE_BANDS: [(f64, RangeInclusive<u8>); 5] = [
    (23.0, 10..=12), // tropics
    (35.0, 8..=10),  // subtropics
    (45.0, 6..=8),   // temperate
    (55.0, 4..=6),   // cool temperate
    (65.0, 2..=4),   // subarctic
];

/// Zones for everything beyond the last band.
const ARCTIC_ZONES: RangeInclusive<u8> = 1..=2;

/// Returns the zone range for the band containing `latitude`.
///
/// Only the absolute latitude matters, so both hemispheres share bands.
#[must_use]
pub fn zone_band(latitude: f64) -> RangeInclusive<u8> {
    let abs_latitude = latitude.abs();
    ZONE_BANDS
        .iter()
        .find(|(upper, _)| abs_latitude <= *upper)
        .map_or(ARCTIC_ZONES, |(_, zones)| zones.clone())
}

/// Estimates a hardiness zone for a latitude in degrees.
///
/// The band is chosen from the absolute latitude and a zone is drawn
/// uniformly from it using the supplied RNG, so the result is reproducible
/// with a seeded generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use releaf::estimate_hardiness_zone;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let zone = estimate_hardiness_zone(47.6, &mut rng);
/// assert!((4..=6).contains(&zone.get()));
/// ```
pub fn estimate_hardiness_zone<R>(latitude: f64, rng: &mut R) -> HardinessZone
where
    R: Rng + ?Sized,
{
    HardinessZone(rng.random_range(zone_band(latitude)))
}
