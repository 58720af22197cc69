//! Grouping of pair list entries by key
//!
//! Shared by the function and injectiveness checks, which differ only in
//! which side of the pair they group by.

use crate::pairs::distinct;
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashMap;

/// Keys that occur more than once, with every item carrying one of them
pub(crate) struct Ambiguity<'a, T, K> {
    /// Duplicated keys in first-occurrence order
    pub keys: Vec<&'a K>,
    /// Items whose key is duplicated, in input order
    pub members: Vec<&'a T>,
}

/// Group `items` by `key` and collect every group of size > 1
///
/// Returns `None` when all keys are unique.
pub(crate) fn ambiguous_by<'a, T, K, F>(items: &'a [T], key: F) -> Option<Ambiguity<'a, T, K>>
where
    K: Eq + Hash + 'a,
    F: Fn(&'a T) -> &'a K,
{
    let mut counts: HashMap<&'a K, usize> = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }

    if counts.len() == items.len() {
        return None;
    }

    let is_duplicated = |k: &&'a K| counts.get(k).is_some_and(|&n| n > 1);
    let keys = distinct(items.iter().map(&key).filter(|k| is_duplicated(k)));
    let members = items.iter().filter(|item| is_duplicated(&key(*item))).collect();

    Some(Ambiguity { keys, members })
}
