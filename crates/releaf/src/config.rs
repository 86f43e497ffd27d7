//! Generator configuration loaded via OrthoConfig.
//!
//! Values come from `--flags`, `RELEAF_*` environment variables and config
//! files, in that order of precedence. Paths default to the fixtures shipped
//! with the crate.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::GeneratorError;

const DEFAULT_SEED_NAME: &str = "mossy-owl";
const DEFAULT_OUTPUT_DIR: &str = "data";

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn default_registry_path() -> PathBuf {
    fixtures_dir().join("seeds.json")
}

fn default_catalog_path() -> PathBuf {
    fixtures_dir().join("tree_species_catalog.csv")
}

/// Settings for the `releaf-generate` command.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RELEAF")]
pub struct GeneratorSettings {
    /// Seed name to load from the registry.
    #[ortho_config(default = DEFAULT_SEED_NAME.to_owned())]
    pub seed_name: String,
    /// Optional override for the number of users generated.
    pub user_count: Option<usize>,
    /// Optional seed registry path override.
    pub registry_path: Option<PathBuf>,
    /// Optional species catalog path override.
    pub catalog_path: Option<PathBuf>,
    /// Directory the CSV files are written to.
    pub output_dir: Option<PathBuf>,
    /// RFC 3339 timestamp generated records are placed relative to.
    /// Defaults to the current time.
    pub reference_time: Option<String>,
}

impl GeneratorSettings {
    /// Returns the configured seed name.
    #[must_use]
    pub fn seed_name(&self) -> &str {
        &self.seed_name
    }

    /// Returns the configured registry path, falling back to the bundled
    /// fixture.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }

    /// Returns the configured catalog path, falling back to the bundled
    /// fixture.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(default_catalog_path)
    }

    /// Returns the output directory as a UTF-8 path.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if the configured path is not
    /// valid UTF-8.
    pub fn output_dir(&self) -> Result<Utf8PathBuf, GeneratorError> {
        self.output_dir.clone().map_or_else(
            || Ok(Utf8PathBuf::from(DEFAULT_OUTPUT_DIR)),
            |path| {
                Utf8PathBuf::from_path_buf(path).map_err(|raw| GeneratorError::Config {
                    message: format!("output directory '{}' is not UTF-8", raw.display()),
                })
            },
        )
    }

    /// Resolves the reference time, using `now` when none is configured.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ReferenceTime`] if the configured value is
    /// not an RFC 3339 timestamp.
    pub fn reference_time(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, GeneratorError> {
        self.reference_time.as_deref().map_or(Ok(now), |raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| GeneratorError::ReferenceTime {
                    value: raw.to_owned(),
                    message: e.to_string(),
                })
        })
    }
}
