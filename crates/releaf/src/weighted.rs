//! Weighted discrete choices.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::GenerationError;

/// Picks one value from a `(value, weight)` table.
///
/// Weights are relative and need not sum to any particular total.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidWeights`] when the table is empty or
/// every weight is zero.
pub(crate) fn choose_weighted<'a, T, R>(
    table: &'static str,
    choices: &'a [(T, u32)],
    rng: &mut R,
) -> Result<&'a T, GenerationError>
where
    R: Rng + ?Sized,
{
    choices
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(value, _)| value)
        .map_err(|err| GenerationError::InvalidWeights {
            table,
            message: err.to_string(),
        })
}
