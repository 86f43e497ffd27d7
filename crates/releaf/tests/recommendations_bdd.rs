//! Behavioural tests for single-location recommendations.
//!
//! These scenarios exercise the suitability filter, the confidence scorer
//! and the recommendation generator together.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use releaf::{
    Aspect, GrowthRate, HardinessZone, Location, MAX_CONFIDENCE, MatchPolicy, Recommendation,
    RecommendationContext, Species, filter_suitable_species, generate_recommendations,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use uuid::Uuid;

/// Test world holding the catalog, location and generated output.
#[derive(Default, ScenarioState)]
struct World {
    catalog: Slot<Vec<Species>>,
    location: Slot<Location>,
    suitable: Slot<Vec<Species>>,
    recommendations: Slot<Vec<Recommendation>>,
}

impl World {
    fn recommendations(&self) -> Vec<Recommendation> {
        self.recommendations
            .get()
            .expect("recommendations should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn species(name: &str, min_zone: u8, max_zone: u8, soil: &str, growth_rate: GrowthRate) -> Species {
    Species {
        species_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
        species_name: name.to_owned(),
        common_name: name.to_owned(),
        min_zone,
        max_zone,
        ideal_soil: soil.to_owned(),
        drought_tolerant: false,
        max_height_m: 18.0,
        growth_rate,
        canopy_spread_m: 9.0,
    }
}

fn location(zone: u8, soil: &str) -> Location {
    Location {
        location_id: Uuid::from_u128(100),
        user_id: Uuid::from_u128(200),
        address: Some("Test Garden".to_owned()),
        latitude: 40.0,
        longitude: -3.7,
        elevation_m: Some(650),
        aspect: Aspect::South,
        slope_deg: Some(2.5),
        soil_type: soil.to_owned(),
        sunlight_hours: 8.5,
        hardiness_zone: HardinessZone::new(zone).expect("valid zone"),
        is_verified: false,
    }
}

// ============================================================================
// Given steps
// ============================================================================

#[given(
    "a catalog with one species for zones {min_zone:u8} to {max_zone:u8} preferring \"{soil}\" soil and growing \"{rate}\""
)]
fn a_catalog_with_one_species(world: &World, min_zone: u8, max_zone: u8, soil: String, rate: String) {
    let growth_rate = rate.parse::<GrowthRate>().expect("known growth rate");
    world
        .catalog
        .set(vec![species("Solo tree", min_zone, max_zone, &soil, growth_rate)]);
}

#[given(
    "a catalog with {count:usize} species for zones {min_zone:u8} to {max_zone:u8} of which {matching:usize} prefer \"{soil}\" soil"
)]
fn a_catalog_with_many_species(
    world: &World,
    count: usize,
    min_zone: u8,
    max_zone: u8,
    matching: usize,
    soil: String,
) {
    let catalog = (0..count)
        .map(|index| {
            let preferred = if index < matching { soil.as_str() } else { "clay" };
            species(
                &format!("Tree {index}"),
                min_zone,
                max_zone,
                preferred,
                GrowthRate::Medium,
            )
        })
        .collect();
    world.catalog.set(catalog);
}

#[given("a location in zone {zone:u8} with \"{soil}\" soil")]
fn a_location_with_soil(world: &World, zone: u8, soil: String) {
    world.location.set(location(zone, &soil));
}

#[given("a location in zone {zone:u8} with no soil description")]
fn a_location_without_soil(world: &World, zone: u8) {
    world.location.set(location(zone, ""));
}

// ============================================================================
// When steps
// ============================================================================

#[when("recommendations are generated with the strict policy")]
fn recommendations_are_generated(world: &World) {
    let catalog = world.catalog.get().expect("catalog should be set");
    let site = world.location.get().expect("location should be set");

    let suitable = filter_suitable_species(&catalog, &site, MatchPolicy::Strict);
    let context = RecommendationContext {
        user_id: site.user_id,
        generated_at: Utc
            .with_ymd_and_hms(2026, 5, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp"),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(314);
    let recommendations = generate_recommendations(&suitable, &site, &context, &mut rng);

    world
        .suitable
        .set(suitable.into_iter().cloned().collect());
    world.recommendations.set(recommendations);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the filter returns {count:usize} species")]
fn the_filter_returns(world: &World, count: usize) {
    let suitable = world.suitable.get().expect("filter should have run");
    assert_eq!(suitable.len(), count);
}

#[then("exactly {count:usize} recommendation is produced")]
fn exactly_n_recommendations(world: &World, count: usize) {
    assert_eq!(world.recommendations().len(), count);
}

#[then("no recommendations are produced")]
fn no_recommendations(world: &World) {
    assert!(world.recommendations().is_empty());
}

#[then("between {low:usize} and {high:usize} recommendations are produced")]
fn between_recommendations(world: &World, low: usize, high: usize) {
    let produced = world.recommendations().len();
    assert!(
        (low..=high).contains(&produced),
        "expected {low}-{high} recommendations, got {produced}"
    );
}

#[then("every recommendation scores the maximum confidence")]
fn every_recommendation_scores_maximum(world: &World) {
    for recommendation in world.recommendations() {
        assert_eq!(recommendation.confidence_score, MAX_CONFIDENCE);
    }
}

#[then("no recommendation repeats a species")]
fn no_recommendation_repeats(world: &World) {
    let recommendations = world.recommendations();
    let unique: HashSet<Uuid> = recommendations.iter().map(|r| r.species_id).collect();
    assert_eq!(unique.len(), recommendations.len());
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/recommendations.feature",
    name = "A perfect match is capped at the confidence ceiling"
)]
fn a_perfect_match_is_capped(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/recommendations.feature",
    name = "No zone match yields no recommendations"
)]
fn no_zone_match_yields_nothing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/recommendations.feature",
    name = "Empty soil skips the soil refinement"
)]
fn empty_soil_skips_refinement(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/recommendations.feature",
    name = "Large candidate pools are narrowed by soil"
)]
fn large_pools_are_narrowed_by_soil(world: World) {
    let _ = world;
}
