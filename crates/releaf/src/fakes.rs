//! Locale-aware fake contact details.
//!
//! Synthetic users are spread across several faker locales so the demo data
//! does not read as if every user lives in one country.

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, PostCode, StreetName};
use fake::faker::internet::raw::SafeEmail;
use fake::locales::{DE_DE, Data, EN, FR_FR, JA_JP, PT_BR};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Locales rotated through when generating contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FakeLocale {
    English,
    French,
    German,
    Japanese,
    BrazilianPortuguese,
}

const LOCALES: [FakeLocale; 5] = [
    FakeLocale::English,
    FakeLocale::French,
    FakeLocale::German,
    FakeLocale::Japanese,
    FakeLocale::BrazilianPortuguese,
];

impl FakeLocale {
    /// Picks a locale uniformly at random.
    pub(crate) fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        LOCALES.choose(rng).copied().unwrap_or(Self::English)
    }

    /// Generates an email address on a reserved example domain.
    pub(crate) fn email<R>(self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::English => email_in(EN, rng),
            Self::French => email_in(FR_FR, rng),
            Self::German => email_in(DE_DE, rng),
            Self::Japanese => email_in(JA_JP, rng),
            Self::BrazilianPortuguese => email_in(PT_BR, rng),
        }
    }

    /// Generates a postal code.
    pub(crate) fn postcode<R>(self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::English => PostCode(EN).fake_with_rng(rng),
            Self::French => PostCode(FR_FR).fake_with_rng(rng),
            Self::German => PostCode(DE_DE).fake_with_rng(rng),
            Self::Japanese => PostCode(JA_JP).fake_with_rng(rng),
            Self::BrazilianPortuguese => PostCode(PT_BR).fake_with_rng(rng),
        }
    }

    /// Generates a single-line street address.
    pub(crate) fn address<R>(self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let city = self.city(rng);
        match self {
            Self::English => address_in(EN, &city, rng),
            Self::French => address_in(FR_FR, &city, rng),
            Self::German => address_in(DE_DE, &city, rng),
            Self::Japanese => address_in(JA_JP, &city, rng),
            Self::BrazilianPortuguese => address_in(PT_BR, &city, rng),
        }
    }

    /// Generates a city name.
    pub(crate) fn city<R>(self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::English => CityName(EN).fake_with_rng(rng),
            Self::French => CityName(FR_FR).fake_with_rng(rng),
            Self::German => CityName(DE_DE).fake_with_rng(rng),
            Self::Japanese => CityName(JA_JP).fake_with_rng(rng),
            Self::BrazilianPortuguese => CityName(PT_BR).fake_with_rng(rng),
        }
    }
}

fn email_in<L, R>(locale: L, rng: &mut R) -> String
where
    L: Data + Copy,
    R: Rng + ?Sized,
{
    SafeEmail(locale).fake_with_rng(rng)
}

fn address_in<L, R>(locale: L, city: &str, rng: &mut R) -> String
where
    L: Data + Copy,
    R: Rng + ?Sized,
{
    let number: String = BuildingNumber(locale).fake_with_rng(rng);
    let street: String = StreetName(locale).fake_with_rng(rng);
    let postcode: String = PostCode(locale).fake_with_rng(rng);
    format!("{number} {street}, {city} {postcode}")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn every_locale_produces_contact_details() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for locale in LOCALES {
            assert!(locale.email(&mut rng).contains('@'));
            assert!(!locale.postcode(&mut rng).is_empty());
            assert!(locale.address(&mut rng).contains(", "));
        }
    }

    #[test]
    fn addresses_name_a_city_for_every_locale() {
        for locale in LOCALES {
            let city = locale.city(&mut ChaCha8Rng::seed_from_u64(31));
            let address = locale.address(&mut ChaCha8Rng::seed_from_u64(31));

            assert!(!city.is_empty());
            assert!(
                address.contains(&format!(", {city} ")),
                "address '{address}' should name city '{city}'"
            );
        }
    }

    #[test]
    fn contact_details_are_reproducible() {
        let mut first = ChaCha8Rng::seed_from_u64(77);
        let mut second = ChaCha8Rng::seed_from_u64(77);

        let locale = FakeLocale::random(&mut first);
        assert_eq!(locale, FakeLocale::random(&mut second));
        assert_eq!(locale.email(&mut first), locale.email(&mut second));
    }
}
