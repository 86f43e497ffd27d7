//! Tree species catalog ingestion.
//!
//! The catalog is a CSV file with one row per species. Ingestion is lenient
//! about the quirks of hand-maintained spreadsheets and strict about values
//! the matching rules depend on:
//!
//! - zone labels may carry a half-zone suffix (`"6b"` is zone 6),
//! - `drought_tolerant` accepts `true`/`false` in any case, `yes`/`no` and
//!   `1`/`0`,
//! - a missing `species_id` is derived from the scientific name,
//! - repeated scientific names keep the first row and drop the rest,
//! - rows whose zone range is inverted are kept but never match.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CatalogError;
use crate::ids::species_uuid;
use crate::species::{GrowthRate, Species, UnknownGrowthRate};

/// An immutable, de-duplicated list of tree species.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesCatalog {
    species: Vec<Species>,
}

impl SpeciesCatalog {
    /// Builds a catalog from already-parsed species.
    ///
    /// Duplicate scientific names are dropped (first occurrence wins) and
    /// inverted zone ranges are logged.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyCatalog`] when no species remain.
    pub fn new(species: Vec<Species>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(species.len());

        for candidate in species {
            if !seen.insert(candidate.species_name.clone()) {
                warn!(
                    species = %candidate.species_name,
                    common_name = %candidate.common_name,
                    "dropping duplicate species name"
                );
                continue;
            }
            if !candidate.has_valid_zone_range() {
                warn!(
                    species = %candidate.species_name,
                    min_zone = candidate.min_zone,
                    max_zone = candidate.max_zone,
                    "species has an inverted zone range and will never match"
                );
            }
            unique.push(candidate);
        }

        if unique.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        Ok(Self { species: unique })
    }

    /// Parses a catalog from CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a row is malformed, a zone label or growth
    /// rate cannot be parsed, or the catalog is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use releaf::SpeciesCatalog;
    ///
    /// let csv = "\
    /// species_name,common_name,min_zone,max_zone,ideal_soil,drought_tolerant,max_height_m,growth_rate,canopy_spread_m
    /// Acer rubrum,Red Maple,3,9,moist well-drained,False,25,fast,12
    /// Quercus alba,White Oak,3b,9a,deep well-drained,True,30,slow,25
    /// ";
    /// let catalog = SpeciesCatalog::from_csv_str(csv).expect("valid catalog");
    ///
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.find("Quercus alba").map(|s| s.max_zone), Some(9));
    /// ```
    pub fn from_csv_str(csv: &str) -> Result<Self, CatalogError> {
        Self::from_reader(csv.as_bytes())
    }

    /// Loads a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IoError`] if the file cannot be opened, and the
    /// errors of [`SpeciesCatalog::from_csv_str`] otherwise.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|e| CatalogError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            species = catalog.len(),
            "loaded species catalog"
        );
        Ok(catalog)
    }

    /// Parses a catalog from any CSV source with a header row.
    ///
    /// # Errors
    ///
    /// See [`SpeciesCatalog::from_csv_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let species = csv_reader
            .deserialize::<RawSpeciesRow>()
            .map(|row| {
                row.map_err(|e| CatalogError::MalformedRow {
                    line: e.position().map_or(0, csv::Position::line),
                    message: e.to_string(),
                })
                .and_then(RawSpeciesRow::into_species)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(species)
    }

    /// Returns every species in catalog order.
    #[must_use]
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Finds a species by scientific name.
    #[must_use]
    pub fn find(&self, species_name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.species_name == species_name)
    }

    /// Returns the number of species.
    #[must_use]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Returns `true` when the catalog holds no species.
    ///
    /// A constructed catalog is never empty; this exists for API symmetry
    /// with [`SpeciesCatalog::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Raw CSV representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawSpeciesRow {
    #[serde(default)]
    species_id: Option<Uuid>,
    species_name: String,
    common_name: String,
    min_zone: String,
    max_zone: String,
    ideal_soil: String,
    drought_tolerant: String,
    max_height_m: f64,
    growth_rate: String,
    canopy_spread_m: f64,
}

impl RawSpeciesRow {
    fn into_species(self) -> Result<Species, CatalogError> {
        let min_zone = parse_zone_label(&self.min_zone, &self.species_name)?;
        let max_zone = parse_zone_label(&self.max_zone, &self.species_name)?;
        let growth_rate = self.growth_rate.parse::<GrowthRate>().map_err(
            |UnknownGrowthRate(value)| CatalogError::UnknownGrowthRate {
                species: self.species_name.clone(),
                value,
            },
        )?;
        let species_id = self
            .species_id
            .unwrap_or_else(|| species_uuid(&self.species_name));

        Ok(Species {
            species_id,
            drought_tolerant: parse_flag(&self.drought_tolerant),
            species_name: self.species_name,
            common_name: self.common_name,
            min_zone,
            max_zone,
            ideal_soil: self.ideal_soil,
            max_height_m: self.max_height_m,
            growth_rate,
            canopy_spread_m: self.canopy_spread_m,
        })
    }
}

/// Parses a zone label such as `"7"` or `"6b"` into its whole zone.
fn parse_zone_label(label: &str, species_name: &str) -> Result<u8, CatalogError> {
    label
        .trim()
        .trim_end_matches(['a', 'b'])
        .parse::<u8>()
        .map_err(|_| CatalogError::InvalidZone {
            species: species_name.to_owned(),
            value: label.to_owned(),
        })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    )
}
