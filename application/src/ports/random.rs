//! Randomness port
//!
//! Question order is shuffled through this port so tests can supply a
//! deterministic permutation instead of asserting on random output.

/// Source of uniform random permutations
pub trait RandomSource: Send + Sync {
    /// A permutation of `0..len`
    fn permutation(&self, len: usize) -> Vec<usize>;
}

/// Reorder `items` by the permutation drawn from `source`.
///
/// Indices outside `0..items.len()` or repeated indices are ignored, so a
/// faulty source can drop items but never duplicate them.
pub fn shuffle_with<T>(source: &dyn RandomSource, items: Vec<T>) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    source
        .permutation(slots.len())
        .into_iter()
        .filter_map(|i| slots.get_mut(i).and_then(Option::take))
        .collect()
}

/// Keeps the original order
pub struct IdentityOrder;

impl RandomSource for IdentityOrder {
    fn permutation(&self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}
