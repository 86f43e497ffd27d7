//! Seed registry types and JSON parsing.
//!
//! The registry names the RNG seeds used to build demo datasets, so a team
//! can refer to "the mossy-owl dataset" and get identical users, locations
//! and recommendations every time.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A registry of named dataset seeds.
///
/// # Example
///
/// ```
/// use releaf::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "seeds": [{"name": "mossy-owl", "seed": 2026, "userCount": 500}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - The seeds array is empty
    /// - Two seeds share a name
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut names = HashSet::new();
        let mut seeds = Vec::with_capacity(raw.seeds.len());
        for s in raw.seeds {
            if !names.insert(s.name.clone()) {
                return Err(RegistryError::DuplicateSeedName { name: s.name });
            }
            seeds.push(SeedDefinition::new(s.name, s.seed, s.user_count));
        }

        Ok(Self {
            version: raw.version,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed for deterministic dataset generation.
///
/// The RNG seed together with the species catalog and reference time fully
/// determines the generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    user_count: usize,
}

impl SeedDefinition {
    /// Creates a seed definition.
    #[must_use]
    pub const fn new(name: String, seed: u64, user_count: usize) -> Self {
        Self {
            name,
            seed,
            user_count,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of users to generate.
    #[must_use]
    pub const fn user_count(&self) -> usize {
        self.user_count
    }

    /// Returns a copy with a different user count.
    #[must_use]
    pub fn with_user_count(&self, user_count: usize) -> Self {
        Self::new(self.name.clone(), self.seed, user_count)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    user_count: usize,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "seeds": [
            {"name": "mossy-owl", "seed": 2026, "userCount": 500},
            {"name": "snowy-penguin", "seed": 1234, "userCount": 25}
        ]
    }"#;

    #[test]
    fn parses_valid_registry() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(registry.seeds().len(), 2);
    }

    #[test]
    fn finds_seed_by_name() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.find_seed("mossy-owl").expect("seed found");

        assert_eq!(seed.name(), "mossy-owl");
        assert_eq!(seed.seed(), 2026);
        assert_eq!(seed.user_count(), 500);
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"seeds": [{"name": "a", "seed": 1, "userCount": 1}]}"#)]
    #[case::missing_user_count(r#"{"version": 1, "seeds": [{"name": "a", "seed": 1}]}"#)]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = SeedRegistry::from_json(json);
        assert!(matches!(result, Err(RegistryError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 99, "seeds": [{"name": "a", "seed": 1, "userCount": 1}]}"#,
        RegistryError::UnsupportedVersion { expected: 1, actual: 99 }
    )]
    #[case::empty_seeds(r#"{"version": 1, "seeds": []}"#, RegistryError::EmptySeeds)]
    #[case::duplicate_names(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "userCount": 1}, {"name": "a", "seed": 2, "userCount": 1}]}"#,
        RegistryError::DuplicateSeedName { name: "a".to_owned() }
    )]
    fn rejects_invalid_registry(#[case] json: &str, #[case] expected: RegistryError) {
        let result = SeedRegistry::from_json(json);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn with_user_count_keeps_seed() {
        let seed = SeedDefinition::new("mossy-owl".to_owned(), 2026, 500);
        let smaller = seed.with_user_count(10);

        assert_eq!(smaller.name(), "mossy-owl");
        assert_eq!(smaller.seed(), 2026);
        assert_eq!(smaller.user_count(), 10);
    }
}
