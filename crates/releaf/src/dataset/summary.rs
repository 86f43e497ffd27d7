//! Summary statistics for a generated dataset.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::user::{SignupSource, UserType};

use super::SyntheticDataset;

/// Totals and distributions describing a [`SyntheticDataset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Number of users.
    pub users: usize,
    /// Number of locations.
    pub locations: usize,
    /// Number of recommendations.
    pub recommendations: usize,
    /// Users per account type.
    pub user_types: BTreeMap<UserType, usize>,
    /// Users per signup source.
    pub sources: BTreeMap<SignupSource, usize>,
}

impl DatasetSummary {
    /// Tallies a dataset.
    #[must_use]
    pub fn from_dataset(dataset: &SyntheticDataset) -> Self {
        let mut user_types = BTreeMap::new();
        let mut sources = BTreeMap::new();
        for user in &dataset.users {
            *user_types.entry(user.user_type).or_insert(0) += 1;
            *sources.entry(user.source).or_insert(0) += 1;
        }

        Self {
            users: dataset.users.len(),
            locations: dataset.locations.len(),
            recommendations: dataset.recommendations.len(),
            user_types,
            sources,
        }
    }

    /// Formats the user type distribution as `label=count` pairs.
    #[must_use]
    pub fn describe_user_types(&self) -> String {
        describe(&self.user_types, UserType::as_str)
    }

    /// Formats the signup source distribution as `label=count` pairs.
    #[must_use]
    pub fn describe_sources(&self) -> String {
        describe(&self.sources, SignupSource::as_str)
    }

    /// Mean locations per user, or zero for an empty dataset.
    #[must_use]
    pub fn average_locations_per_user(&self) -> f64 {
        ratio(self.locations, self.users)
    }

    /// Mean recommendations per location, or zero when there are no
    /// locations.
    #[must_use]
    pub fn average_recommendations_per_location(&self) -> f64 {
        ratio(self.recommendations, self.locations)
    }
}

fn describe<K: Copy>(counts: &BTreeMap<K, usize>, label: impl Fn(K) -> &'static str) -> String {
    counts
        .iter()
        .map(|(key, count)| format!("{}={count}", label(*key)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "record counts are far below f64 precision limits"
)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
