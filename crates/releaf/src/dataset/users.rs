//! Synthetic users spread across the inhabited latitudes.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::fakes::FakeLocale;
use crate::ids::random_uuid;
use crate::location::Coordinates;
use crate::user::{SignupSource, UserRecord, UserType};
use crate::weighted::choose_weighted;

/// Latitude range for users placed anywhere, excluding the polar regions.
const LATITUDE_RANGE: (f64, f64) = (-60.0, 70.0);

/// Longitude range for users placed anywhere.
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Scatter in degrees applied around a major city.
const CITY_SCATTER_RANGE: (f64, f64) = (-2.0, 2.0);

/// Probability that a user is placed near a major city (30%).
const CITY_BIAS_NUMERATOR: u32 = 3;

/// Probability that a user has logged in recently (90%).
const RECENT_LOGIN_NUMERATOR: u32 = 9;

/// Probability that a user supplied a postal code (80%).
const ZIP_CODE_NUMERATOR: u32 = 8;

/// Shared denominator for the probabilities above.
const PROBABILITY_DENOMINATOR: u32 = 10;

/// Accounts are created within this many seconds before the reference time.
const ACCOUNT_AGE_SECONDS: i64 = 2 * 365 * 24 * 60 * 60;

/// Recent logins fall within this many seconds before the reference time.
const RECENT_LOGIN_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Rough coordinates of major population centres.
const MAJOR_CITIES: [Coordinates; 10] = [
    Coordinates::new(40.7128, -74.0060),   // New York
    Coordinates::new(51.5074, -0.1278),    // London
    Coordinates::new(35.6762, 139.6503),   // Tokyo
    Coordinates::new(48.8566, 2.3522),     // Paris
    Coordinates::new(-33.8688, 151.2093),  // Sydney
    Coordinates::new(19.0760, 72.8777),    // Mumbai
    Coordinates::new(-23.5505, -46.6333),  // São Paulo
    Coordinates::new(39.9042, 116.4074),   // Beijing
    Coordinates::new(55.7558, 37.6176),    // Moscow
    Coordinates::new(-26.2041, 28.0473),   // Johannesburg
];

const USER_TYPE_WEIGHTS: [(UserType, u32); 5] = [
    (UserType::Individual, 70),
    (UserType::Organization, 15),
    (UserType::School, 5),
    (UserType::Government, 5),
    (UserType::Nonprofit, 5),
];

const SOURCE_WEIGHTS: [(SignupSource, u32); 5] = [
    (SignupSource::Web, 40),
    (SignupSource::Mobile, 30),
    (SignupSource::PartnerCampaign, 15),
    (SignupSource::SocialMedia, 10),
    (SignupSource::Referral, 5),
];

/// Generates one synthetic user.
pub(super) fn generate_user(
    rng: &mut ChaCha8Rng,
    reference_time: DateTime<Utc>,
) -> Result<UserRecord, GenerationError> {
    let locale = FakeLocale::random(rng);
    let coordinates = home_coordinates(rng).rounded();

    let user_id = random_uuid(rng);
    let email = locale.email(rng);
    let created_at = seconds_before(reference_time, ACCOUNT_AGE_SECONDS, rng)?;
    let last_login = if rng.random_ratio(RECENT_LOGIN_NUMERATOR, PROBABILITY_DENOMINATOR) {
        Some(seconds_before(reference_time, RECENT_LOGIN_SECONDS, rng)?)
    } else {
        None
    };
    let zip_code = rng
        .random_ratio(ZIP_CODE_NUMERATOR, PROBABILITY_DENOMINATOR)
        .then(|| locale.postcode(rng));
    let user_type = *choose_weighted("user_type", &USER_TYPE_WEIGHTS, rng)?;
    let source = *choose_weighted("source", &SOURCE_WEIGHTS, rng)?;

    Ok(UserRecord {
        user_id,
        email,
        created_at,
        last_login,
        zip_code,
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        user_type,
        source,
    })
}

fn home_coordinates(rng: &mut ChaCha8Rng) -> Coordinates {
    let anywhere = Coordinates::new(
        rng.random_range(LATITUDE_RANGE.0..LATITUDE_RANGE.1),
        rng.random_range(LONGITUDE_RANGE.0..LONGITUDE_RANGE.1),
    );

    if !rng.random_ratio(CITY_BIAS_NUMERATOR, PROBABILITY_DENOMINATOR) {
        return anywhere;
    }

    let city = MAJOR_CITIES.choose(rng).copied().unwrap_or(anywhere);
    city.offset_clamped(
        rng.random_range(CITY_SCATTER_RANGE.0..CITY_SCATTER_RANGE.1),
        rng.random_range(CITY_SCATTER_RANGE.0..CITY_SCATTER_RANGE.1),
    )
}

/// Picks a timestamp uniformly within `max_seconds` before `reference_time`.
pub(super) fn seconds_before(
    reference_time: DateTime<Utc>,
    max_seconds: i64,
    rng: &mut ChaCha8Rng,
) -> Result<DateTime<Utc>, GenerationError> {
    let offset_seconds = rng.random_range(0..=max_seconds);
    TimeDelta::try_seconds(offset_seconds)
        .and_then(|delta| reference_time.checked_sub_signed(delta))
        .ok_or(GenerationError::TimestampOutOfRange { offset_seconds })
}
