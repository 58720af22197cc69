//! Pair list utilities
//!
//! A pair list is an ordered slice of `(left, right)` tuples. Duplicates are
//! kept as-is; they are input to validation, not noise to be collapsed.

use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;

/// A single `(left, right)` association
pub type Pair<L, R> = (L, R);

/// Swap the two sides of a pair
pub fn flip<L, R>((left, right): Pair<L, R>) -> Pair<R, L> {
    (right, left)
}

/// Swap the two sides of every pair, keeping the list order
pub fn invert<L: Clone, R: Clone>(pairs: &[Pair<L, R>]) -> Vec<Pair<R, L>> {
    pairs.iter().cloned().map(flip).collect()
}

/// Distinct left values, in first-occurrence order
pub fn domain<L, R>(pairs: &[Pair<L, R>]) -> Vec<&L>
where
    L: Eq + Hash,
{
    distinct(pairs.iter().map(|(left, _)| left))
}

/// Distinct right values, in first-occurrence order
pub fn image<L, R>(pairs: &[Pair<L, R>]) -> Vec<&R>
where
    R: Eq + Hash,
{
    distinct(pairs.iter().map(|(_, right)| right))
}

/// Keep the first occurrence of every value
pub(crate) fn distinct<'a, T, I>(values: I) -> Vec<&'a T>
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    values.into_iter().filter(|value| seen.insert(*value)).collect()
}
