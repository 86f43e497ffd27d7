//! Error types for the releaf crate.
//!
//! This module defines semantic error enums for catalog ingestion, seed
//! registry parsing, dataset generation, onboarding and export, following the
//! project's error handling conventions with `thiserror`.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when a hardiness zone value falls outside the supported
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The zone is not between 1 and 12 inclusive.
    #[error("hardiness zone {value} is outside the supported range 1-12")]
    OutOfRange {
        /// The rejected zone value.
        value: u8,
    },
}

/// Errors that can occur when loading the tree species catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read species catalog at '{path}': {message}")]
    IoError {
        /// Path to the catalog file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A catalog row could not be decoded.
    #[error("malformed catalog row at line {line}: {message}")]
    MalformedRow {
        /// One-based line number reported by the CSV reader, or zero when
        /// unknown.
        line: u64,
        /// Description of the decoding error.
        message: String,
    },

    /// A zone label could not be parsed as a hardiness zone.
    #[error("invalid zone '{value}' for species '{species}'")]
    InvalidZone {
        /// Scientific name of the offending species.
        species: String,
        /// The raw zone label.
        value: String,
    },

    /// The growth rate is not one of `fast`, `medium` or `slow`.
    #[error("unknown growth rate '{value}' for species '{species}'")]
    UnknownGrowthRate {
        /// Scientific name of the offending species.
        species: String,
        /// The raw growth rate value.
        value: String,
    },

    /// The catalog contains no species rows.
    #[error("species catalog contains no rows")]
    EmptyCatalog,
}

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed name '{name}' appears more than once in registry")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur while generating synthetic data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A weighted choice table could not be sampled.
    #[error("invalid weights for {table}: {message}")]
    InvalidWeights {
        /// Name of the weight table.
        table: &'static str,
        /// Description of the sampling error.
        message: String,
    },

    /// A timestamp offset moved outside the representable range.
    #[error("timestamp offset of {offset_seconds}s is out of range")]
    TimestampOutOfRange {
        /// The offset that could not be applied.
        offset_seconds: i64,
    },
}

/// Errors raised while onboarding a single user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OnboardingError {
    /// The person's name is empty or whitespace.
    #[error("user name must not be blank")]
    BlankName,

    /// The location label is empty or whitespace.
    #[error("location label must not be blank")]
    BlankLocationLabel,

    /// The resolved coordinates are not a valid latitude/longitude pair.
    #[error("coordinates ({latitude}, {longitude}) are out of range")]
    InvalidCoordinates {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
}

/// Errors raised while exporting a dataset to disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The output directory could not be created or opened.
    #[error("failed to open output directory '{path}': {message}")]
    OutputDir {
        /// The output directory path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// Rows could not be encoded as CSV.
    #[error("failed to encode '{file}': {message}")]
    Encode {
        /// Target file name.
        file: &'static str,
        /// Description of the encoding error.
        message: String,
    },

    /// The encoded file could not be written.
    #[error("failed to write '{path}': {message}")]
    WriteError {
        /// Path of the file being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors surfaced by the dataset generator command.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Layered configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// The configured reference time is not RFC 3339.
    #[error("invalid reference time '{value}': {message}")]
    ReferenceTime {
        /// The raw configured value.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The seed registry could not be loaded or queried.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// The species catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Dataset generation failed.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    /// The dataset could not be written.
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}
