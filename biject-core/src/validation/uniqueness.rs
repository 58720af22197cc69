//! Function and injectiveness checks
//!
//! A pair list is a function when no left value repeats, and injective when
//! no right value repeats.

use super::grouping::ambiguous_by;
use crate::error::{NotAFunction, NotInjective};
use crate::pairs::Pair;
use core::hash::Hash;

/// Check that every left value maps to exactly one right value
///
/// On failure, every duplicated left value is reported (not just the first),
/// along with all pairs that carry one of them.
pub fn check_function<L, R>(pairs: &[Pair<L, R>]) -> Result<(), NotAFunction<L, R>>
where
    L: Eq + Hash + Clone,
    R: Clone,
{
    match ambiguous_by(pairs, |(left, _)| left) {
        None => Ok(()),
        Some(found) => Err(NotAFunction {
            duplicated: found.keys.into_iter().cloned().collect(),
            pairs: found.members.into_iter().cloned().collect(),
        }),
    }
}

/// Check that every right value is reached from exactly one left value
pub fn check_injective<L, R>(pairs: &[Pair<L, R>]) -> Result<(), NotInjective<L, R>>
where
    L: Clone,
    R: Eq + Hash + Clone,
{
    match ambiguous_by(pairs, |(_, right)| right) {
        None => Ok(()),
        Some(found) => Err(NotInjective {
            duplicated: found.keys.into_iter().cloned().collect(),
            pairs: found.members.into_iter().cloned().collect(),
        }),
    }
}
