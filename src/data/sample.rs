use rand::Rng;
use rand::seq::SliceRandom;

use super::error::DataError;

/// Number of reviews shown in the detail cards.
pub const SAMPLE_SIZE: usize = 5;

/// Pick `k` of the given indices uniformly at random, without replacement.
///
/// Fails with [`DataError::InsufficientData`] when the filtered set is smaller
/// than `k`; the caller renders an empty-state message instead of the cards.
pub fn sample_indices(indices: &[usize], k: usize) -> Result<Vec<usize>, DataError> {
    sample_indices_with(&mut rand::thread_rng(), indices, k)
}

/// Same as [`sample_indices`] with a caller-supplied RNG.
pub fn sample_indices_with<R: Rng + ?Sized>(
    rng: &mut R,
    indices: &[usize],
    k: usize,
) -> Result<Vec<usize>, DataError> {
    if indices.len() < k {
        return Err(DataError::InsufficientData {
            wanted: k,
            available: indices.len(),
        });
    }
    Ok(indices.choose_multiple(rng, k).copied().collect())
}
