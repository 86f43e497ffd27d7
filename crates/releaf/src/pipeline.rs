//! End-to-end dataset generation driven by [`GeneratorSettings`].
//!
//! The `releaf-generate` binary delegates here so the whole flow can be
//! exercised in tests without spawning a process.

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::SpeciesCatalog;
use crate::config::GeneratorSettings;
use crate::dataset::{DatasetSummary, build_dataset};
use crate::error::GeneratorError;
use crate::export::export_dataset;
use crate::registry::SeedRegistry;

/// Outcome of a generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Seed the dataset was generated from.
    pub seed_name: String,
    /// Dataset totals and distributions.
    pub summary: DatasetSummary,
    /// Files written, in table order.
    pub files: Vec<Utf8PathBuf>,
}

/// Loads the registry and catalog, builds the dataset and exports it.
///
/// `now` is used as the reference time unless the settings override it.
///
/// # Errors
///
/// Returns [`GeneratorError`] if any stage fails.
pub fn run_generator(
    settings: &GeneratorSettings,
    now: DateTime<Utc>,
) -> Result<GenerationReport, GeneratorError> {
    let reference_time = settings.reference_time(now)?;
    let output_dir = settings.output_dir()?;

    let registry = SeedRegistry::from_file(&settings.registry_path())?;
    let registered = registry.find_seed(settings.seed_name())?;
    let seed = settings.user_count.map_or_else(
        || registered.clone(),
        |count| registered.with_user_count(count),
    );
    let catalog = SpeciesCatalog::from_path(&settings.catalog_path())?;

    let dataset = build_dataset(&catalog, &seed, reference_time)?;
    let files = export_dataset(&dataset, &output_dir)?;
    let summary = dataset.summary();

    info!(
        seed = seed.name(),
        users = summary.users,
        locations = summary.locations,
        recommendations = summary.recommendations,
        avg_locations_per_user = summary.average_locations_per_user(),
        avg_recommendations_per_location = summary.average_recommendations_per_location(),
        user_types = %summary.describe_user_types(),
        sources = %summary.describe_sources(),
        output_dir = %output_dir,
        "dataset generation complete"
    );

    Ok(GenerationReport {
        seed_name: dataset.seed_name,
        summary,
        files,
    })
}
