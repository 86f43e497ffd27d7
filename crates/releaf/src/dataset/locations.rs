//! Synthetic planting locations near their owners.

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::fakes::FakeLocale;
use crate::ids::random_uuid;
use crate::location::{Aspect, Coordinates, Location, round_to};
use crate::user::UserRecord;
use crate::weighted::choose_weighted;
use crate::zone::estimate_hardiness_zone;

/// Soil descriptors used by the species catalog.
pub const SOIL_TYPES: [&str; 14] = [
    "well-drained",
    "moist well-drained",
    "sandy well-drained",
    "clay well-drained",
    "wet",
    "moist to wet",
    "moist acidic",
    "well-drained acidic",
    "sandy loam",
    "deep well-drained",
    "rocky well-drained",
    "adaptable",
    "moist alkaline",
    "rocky alkaline",
];

const LOCATIONS_PER_USER: [(usize, u32); 3] = [(1, 70), (2, 25), (3, 5)];

/// Offset range in degrees for a user's first location (roughly 10 km).
const NEAR_OFFSET_RANGE: (f64, f64) = (-0.1, 0.1);

/// Offset range in degrees for further locations (roughly 100 km).
const FAR_OFFSET_RANGE: (f64, f64) = (-1.0, 1.0);

const MAX_ELEVATION_M: u16 = 3000;
const MAX_SLOPE_DEG: f64 = 45.0;
const SUNLIGHT_RANGE: (f64, f64) = (4.0, 12.0);
const ONE_DECIMAL: i32 = 1;

const ADDRESS_NUMERATOR: u32 = 7;
const ELEVATION_NUMERATOR: u32 = 8;
const SLOPE_NUMERATOR: u32 = 7;
const VERIFIED_NUMERATOR: u32 = 3;
const PROBABILITY_DENOMINATOR: u32 = 10;

/// Generates between one and three locations for a user.
pub(super) fn generate_locations(
    user: &UserRecord,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Location>, GenerationError> {
    let count = *choose_weighted("locations_per_user", &LOCATIONS_PER_USER, rng)?;
    let home = Coordinates::new(user.latitude, user.longitude);

    Ok((0..count)
        .map(|index| {
            let range = if index == 0 {
                NEAR_OFFSET_RANGE
            } else {
                FAR_OFFSET_RANGE
            };
            let site = home.offset_clamped(
                rng.random_range(range.0..=range.1),
                rng.random_range(range.0..=range.1),
            );
            generate_site(user, site, rng)
        })
        .collect())
}

fn generate_site(user: &UserRecord, site: Coordinates, rng: &mut ChaCha8Rng) -> Location {
    let locale = FakeLocale::random(rng);
    let coordinates = site.rounded();

    Location {
        location_id: random_uuid(rng),
        user_id: user.user_id,
        address: rng
            .random_ratio(ADDRESS_NUMERATOR, PROBABILITY_DENOMINATOR)
            .then(|| locale.address(rng)),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        elevation_m: rng
            .random_ratio(ELEVATION_NUMERATOR, PROBABILITY_DENOMINATOR)
            .then(|| rng.random_range(0..=MAX_ELEVATION_M)),
        aspect: Aspect::ALL.choose(rng).copied().unwrap_or(Aspect::Flat),
        slope_deg: rng
            .random_ratio(SLOPE_NUMERATOR, PROBABILITY_DENOMINATOR)
            .then(|| round_to(rng.random_range(0.0..=MAX_SLOPE_DEG), ONE_DECIMAL)),
        soil_type: SOIL_TYPES
            .choose(rng)
            .map_or_else(String::new, |soil| (*soil).to_owned()),
        sunlight_hours: round_to(
            rng.random_range(SUNLIGHT_RANGE.0..=SUNLIGHT_RANGE.1),
            ONE_DECIMAL,
        ),
        hardiness_zone: estimate_hardiness_zone(site.latitude, rng),
        is_verified: rng.random_ratio(VERIFIED_NUMERATOR, PROBABILITY_DENOMINATOR),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rand::SeedableRng;
    use uuid::Uuid;

    use super::*;
    use crate::user::{SignupSource, UserType};

    fn user(latitude: f64, longitude: f64) -> UserRecord {
        UserRecord {
            user_id: Uuid::from_u128(42),
            email: "ada@example.com".to_owned(),
            created_at: Utc::now(),
            last_login: None,
            zip_code: None,
            latitude,
            longitude,
            user_type: UserType::Individual,
            source: SignupSource::Web,
        }
    }

    #[test]
    fn locations_stay_near_their_owner() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let owner = user(45.0, 10.0);

        for _ in 0..200 {
            let locations = generate_locations(&owner, &mut rng).expect("locations generated");

            assert!((1..=3).contains(&locations.len()));
            let first = locations.first().expect("at least one location");
            assert!((44.899_999..=45.100_001).contains(&first.latitude));
            assert!((9.899_999..=10.100_001).contains(&first.longitude));
            for location in &locations {
                assert_eq!(location.user_id, owner.user_id);
                assert!((44.0..=46.0).contains(&location.latitude));
                assert!(SOIL_TYPES.contains(&location.soil_type.as_str()));
                assert!((4.0..=12.0).contains(&location.sunlight_hours));
                assert!(location.elevation_m.is_none_or(|m| m <= MAX_ELEVATION_M));
                assert!(location.slope_deg.is_none_or(|s| (0.0..=MAX_SLOPE_DEG).contains(&s)));
            }
        }
    }

    #[test]
    fn clamps_locations_at_the_poles() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let owner = user(90.0, 180.0);

        for _ in 0..50 {
            for location in generate_locations(&owner, &mut rng).expect("locations generated") {
                assert!(location.coordinates().is_valid());
            }
        }
    }

    #[test]
    fn zone_follows_location_latitude() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let owner = user(5.0, 0.0);

        for _ in 0..50 {
            for location in generate_locations(&owner, &mut rng).expect("locations generated") {
                assert!((10..=12).contains(&location.hardiness_zone.get()));
            }
        }
    }
}
