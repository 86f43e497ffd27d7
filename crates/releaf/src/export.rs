//! CSV export of generated datasets.
//!
//! A dataset is written as three files, one per table, using the column
//! names the loading pipeline expects. The three files are replaced as a
//! set: either every table is updated or none is.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::atomic_io::write_all_atomic;
use crate::dataset::SyntheticDataset;
use crate::error::ExportError;
use crate::recommendation::Recommendation;

/// File name of the users table.
pub const USERS_FILE: &str = "users.csv";

/// File name of the locations table.
pub const LOCATIONS_FILE: &str = "locations.csv";

/// File name of the recommendations table.
pub const RECOMMENDATIONS_FILE: &str = "tree_recommendations.csv";

/// Writes a dataset into `output_dir`, creating the directory if needed.
///
/// Returns the paths of the written files in table order.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory cannot be created or opened,
/// rows cannot be encoded, or a file cannot be written.
pub fn export_dataset(
    dataset: &SyntheticDataset,
    output_dir: &Utf8Path,
) -> Result<Vec<Utf8PathBuf>, ExportError> {
    let dir = open_output_dir(output_dir)?;

    let tables = [
        (USERS_FILE, encode(USERS_FILE, &dataset.users)?),
        (LOCATIONS_FILE, encode(LOCATIONS_FILE, &dataset.locations)?),
        (
            RECOMMENDATIONS_FILE,
            encode(
                RECOMMENDATIONS_FILE,
                dataset.recommendations.iter().map(RecommendationRow::from),
            )?,
        ),
    ];

    let files: Vec<(&Utf8Path, &[u8])> = tables
        .iter()
        .map(|(file, contents)| (Utf8Path::new(*file), contents.as_slice()))
        .collect();
    write_all_atomic(&dir, &files).map_err(|err| match err {
        ExportError::WriteError { path, message } => ExportError::WriteError {
            path: output_dir.join(path),
            message,
        },
        other => other,
    })?;

    let written: Vec<Utf8PathBuf> = tables
        .iter()
        .map(|(file, contents)| {
            let path = output_dir.join(file);
            info!(path = %path, bytes = contents.len(), "wrote export file");
            path
        })
        .collect();

    Ok(written)
}

fn open_output_dir(output_dir: &Utf8Path) -> Result<Dir, ExportError> {
    let to_error = |err: std::io::Error| ExportError::OutputDir {
        path: output_dir.to_path_buf(),
        message: err.to_string(),
    };
    Dir::create_ambient_dir_all(output_dir, ambient_authority()).map_err(to_error)?;
    Dir::open_ambient_dir(output_dir, ambient_authority()).map_err(to_error)
}

fn encode<I>(file: &'static str, rows: I) -> Result<Vec<u8>, ExportError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let to_error = |message: String| ExportError::Encode { file, message };

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| to_error(e.to_string()))?;
    }
    writer.into_inner().map_err(|e| to_error(e.to_string()))
}

/// Column layout of `tree_recommendations.csv`.
#[derive(Debug, Serialize)]
struct RecommendationRow {
    recommendation_id: Uuid,
    user_id: Uuid,
    location_id: Uuid,
    species_id: Uuid,
    generated_at: DateTime<Utc>,
    confidence_score: f64,
}

impl From<&Recommendation> for RecommendationRow {
    fn from(value: &Recommendation) -> Self {
        Self {
            recommendation_id: value.recommendation_id,
            user_id: value.user_id,
            location_id: value.location_id,
            species_id: value.species_id,
            generated_at: value.generated_at,
            confidence_score: value.confidence_score,
        }
    }
}
