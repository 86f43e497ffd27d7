//! Tests for the bundled species catalog and seed registry.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use releaf::{CatalogError, RegistryError, SeedRegistry, SpeciesCatalog};
use rstest::{fixture, rstest};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[fixture]
fn catalog() -> SpeciesCatalog {
    SpeciesCatalog::from_path(&fixture_path("tree_species_catalog.csv"))
        .expect("bundled catalog loads")
}

#[rstest]
fn bundled_catalog_has_unique_valid_species(catalog: SpeciesCatalog) {
    assert!(catalog.len() >= 40);

    let ids: HashSet<_> = catalog.species().iter().map(|s| s.species_id).collect();
    assert_eq!(ids.len(), catalog.len());
    for species in catalog.species() {
        assert!(species.has_valid_zone_range(), "{}", species.species_name);
        assert!((1..=12).contains(&species.min_zone));
        assert!((1..=12).contains(&species.max_zone));
    }
}

#[rstest]
fn bundled_catalog_strips_half_zone_suffixes(catalog: SpeciesCatalog) {
    let magnolia = catalog
        .find("Magnolia grandiflora")
        .expect("magnolia present");
    assert_eq!((magnolia.min_zone, magnolia.max_zone), (6, 10));
}

#[rstest]
#[case(1)]
#[case(6)]
#[case(12)]
fn bundled_catalog_covers_every_band(catalog: SpeciesCatalog, #[case] zone: u8) {
    assert!(
        catalog
            .species()
            .iter()
            .any(|s| s.min_zone <= zone && zone <= s.max_zone)
    );
}

#[test]
fn bundled_registry_names_default_seed() {
    let registry =
        SeedRegistry::from_file(&fixture_path("seeds.json")).expect("bundled registry loads");

    let seed = registry.find_seed("mossy-owl").expect("default seed present");
    assert_eq!(seed.seed(), 2026);
    assert_eq!(seed.user_count(), 500);
}

#[test]
fn missing_registry_file_is_an_io_error() {
    let result = SeedRegistry::from_file(Path::new("/nonexistent/seeds.json"));
    assert!(matches!(result, Err(RegistryError::IoError { .. })));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let result = SpeciesCatalog::from_path(Path::new("/nonexistent/catalog.csv"));
    assert!(matches!(result, Err(CatalogError::IoError { .. })));
}

#[test]
fn unknown_seed_is_reported_by_name() {
    let registry =
        SeedRegistry::from_file(&fixture_path("seeds.json")).expect("bundled registry loads");

    let result = registry.find_seed("rainbow-fox");

    assert_eq!(
        result,
        Err(RegistryError::SeedNotFound {
            name: "rainbow-fox".to_owned()
        })
    );
}
