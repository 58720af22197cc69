//! Surjectiveness and totality checks
//!
//! Both compare one side of a pair list against a caller-declared set. When
//! no set is declared the check passes: the pair list defines its own
//! domain and codomain.

use crate::error::{NotSurjective, NotTotal};
use crate::pairs::{distinct, Pair};
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;

/// Elements of `declared` that never occur in `present`, once each, in
/// declaration order
fn uncovered<'a, T, I>(declared: &[T], present: I) -> Vec<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let present: HashSet<&T> = present.into_iter().collect();
    distinct(declared.iter().filter(|element| !present.contains(element)))
        .into_iter()
        .cloned()
        .collect()
}

/// Check that every codomain element is produced by some pair
///
/// Reports `codomain \ image`. A `None` codomain never fails.
pub fn check_surjective<L, R>(
    pairs: &[Pair<L, R>],
    codomain: Option<&[R]>,
) -> Result<(), NotSurjective<R>>
where
    R: Eq + Hash + Clone,
{
    let Some(codomain) = codomain else {
        return Ok(());
    };

    let missing = uncovered(codomain, pairs.iter().map(|(_, right)| right));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(NotSurjective { missing })
    }
}

/// Check that every declared domain element is mapped by some pair
///
/// Reports `domain \ left values`. A `None` domain never fails.
pub fn check_total<L, R>(pairs: &[Pair<L, R>], domain: Option<&[L]>) -> Result<(), NotTotal<L>>
where
    L: Eq + Hash + Clone,
{
    let Some(domain) = domain else {
        return Ok(());
    };

    let missing = uncovered(domain, pairs.iter().map(|(left, _)| left));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(NotTotal { missing })
    }
}
