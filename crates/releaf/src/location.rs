//! Planting locations and coordinates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::zone::HardinessZone;

/// Decimal places kept for generated coordinates.
pub(crate) const COORDINATE_DECIMALS: i32 = 6;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, -90 to 90.
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` when both components are finite and in range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Moves the pair by the given offsets and clamps the result into the
    /// valid latitude and longitude ranges.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "coordinate offsets are plain degree sums")]
    pub fn offset_clamped(self, latitude_offset: f64, longitude_offset: f64) -> Self {
        Self {
            latitude: (self.latitude + latitude_offset).clamp(-90.0, 90.0),
            longitude: (self.longitude + longitude_offset).clamp(-180.0, 180.0),
        }
    }

    /// Rounds both components to six decimal places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            latitude: round_to(self.latitude, COORDINATE_DECIMALS),
            longitude: round_to(self.longitude, COORDINATE_DECIMALS),
        }
    }
}

/// Compass direction a planting site faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    /// Faces north.
    North,
    /// Faces north-east.
    Northeast,
    /// Faces east.
    East,
    /// Faces south-east.
    Southeast,
    /// Faces south.
    South,
    /// Faces south-west.
    Southwest,
    /// Faces west.
    West,
    /// Faces north-west.
    Northwest,
    /// Level ground.
    Flat,
}

impl Aspect {
    /// Every aspect, in compass order with flat last.
    pub const ALL: [Self; 9] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
        Self::Flat,
    ];
}

/// A planting location owned by a user.
///
/// Locations are created once per onboarding request or synthetic
/// generation pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier for the location.
    pub location_id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Free-text address, when known.
    pub address: Option<String>,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Elevation in metres, when known. Stored in the `elevation` column.
    #[serde(rename = "elevation")]
    pub elevation_m: Option<u16>,
    /// Direction the site faces.
    pub aspect: Aspect,
    /// Terrain slope in degrees, when known.
    pub slope_deg: Option<f64>,
    /// Soil description, e.g. `"sandy loam"`. May be empty.
    pub soil_type: String,
    /// Estimated average daily sunlight hours.
    pub sunlight_hours: f64,
    /// Estimated hardiness zone.
    pub hardiness_zone: HardinessZone,
    /// Whether the site details were verified.
    pub is_verified: bool,
}

impl Location {
    /// Returns the location's coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Returns the first whitespace-delimited word of the soil description.
    ///
    /// Returns `None` when the soil description is empty or whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// # use releaf::{Aspect, HardinessZone, Location};
    /// # use uuid::Uuid;
    /// let location = Location {
    ///     location_id: Uuid::nil(),
    ///     user_id: Uuid::nil(),
    ///     address: None,
    ///     latitude: 47.6,
    ///     longitude: -122.3,
    ///     elevation_m: None,
    ///     aspect: Aspect::Flat,
    ///     slope_deg: None,
    ///     soil_type: "sandy loam".to_owned(),
    ///     sunlight_hours: 8.0,
    ///     hardiness_zone: HardinessZone::new(6).expect("zone"),
    ///     is_verified: false,
    /// };
    /// assert_eq!(location.soil_token(), Some("sandy"));
    /// ```
    #[must_use]
    pub fn soil_token(&self) -> Option<&str> {
        self.soil_type.split_whitespace().next()
    }
}

/// Rounds a value to the given number of decimal places.
#[expect(clippy::float_arithmetic, reason = "decimal rounding scales by a power of ten")]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
