//! Bijection validation for pair lists
//!
//! This module contains pure validation functions with no I/O dependencies.
//! Every check reports its violation as data, and the aggregate validators
//! run all checks without short-circuiting so one call reports everything
//! wrong with a pair list.

pub mod closure;
pub mod coverage;
mod grouping;
pub mod uniqueness;

pub use closure::{check_closure, find_unclosed};
pub use coverage::{check_surjective, check_total};
pub use uniqueness::{check_function, check_injective};

use crate::error::ViolationReport;
use crate::pairs::Pair;
use core::hash::Hash;

/// Caller-declared sets a pair list must cover
///
/// `None` on either side means that side defines itself and its coverage
/// check passes trivially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declared<'a, L, R> {
    /// Every element must appear as a left value
    pub domain: Option<&'a [L]>,
    /// Every element must appear as a right value
    pub codomain: Option<&'a [R]>,
}

impl<'a, L, R> Declared<'a, L, R> {
    /// Declare neither side
    pub const fn none() -> Self {
        Self {
            domain: None,
            codomain: None,
        }
    }

    /// Declare the codomain only
    pub const fn codomain(codomain: &'a [R]) -> Self {
        Self {
            domain: None,
            codomain: Some(codomain),
        }
    }
}

impl<L, R> Default for Declared<'_, L, R> {
    fn default() -> Self {
        Self::none()
    }
}

/// Validate that `pairs` form a bijection, optionally onto `codomain`
///
/// Runs the function, injectiveness and surjectiveness checks and returns
/// every violation found, in that order.
pub fn validate_bijection<L, R>(
    pairs: &[Pair<L, R>],
    codomain: Option<&[R]>,
) -> Result<(), ViolationReport<L, R>>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    validate_with(
        pairs,
        &Declared {
            domain: None,
            codomain,
        },
    )
}

/// Validate `pairs` against declared domain and codomain
///
/// Like [`validate_bijection`], with an additional totality check when a
/// domain is declared.
pub fn validate_with<L, R>(
    pairs: &[Pair<L, R>],
    declared: &Declared<'_, L, R>,
) -> Result<(), ViolationReport<L, R>>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    let mut report = ViolationReport::new();
    report.record(check_function(pairs));
    report.record(check_injective(pairs));
    report.record(check_surjective(pairs, declared.codomain));
    report.record(check_total(pairs, declared.domain));
    report.into_result()
}

/// Check whether `pairs` form a bijection, optionally onto `codomain`
pub fn is_bijection<L, R>(pairs: &[Pair<L, R>], codomain: Option<&[R]>) -> bool
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    validate_bijection(pairs, codomain).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NotAFunction, NotInjective, NotSurjective, Violation, ViolationKind};
    use crate::Value;
    use alloc::vec;

    #[test]
    fn test_valid_bijection() {
        let pairs = [('a', 3), ('c', 2), ('b', 1)];
        assert_eq!(validate_bijection(&pairs, None), Ok(()));
        assert_eq!(validate_bijection(&pairs, Some(&[1, 2, 3])), Ok(()));
        assert!(is_bijection(&pairs, None));
        assert!(is_bijection::<u8, u8>(&[], None));
    }

    #[test]
    fn test_not_a_function() {
        let report = validate_bijection(&[(1, 'c'), (2, 'a'), (1, 'b')], None).unwrap_err();
        assert_eq!(
            report.violations(),
            &[Violation::NotAFunction(NotAFunction {
                duplicated: vec![1],
                pairs: vec![(1, 'c'), (1, 'b')],
            })]
        );
    }

    #[test]
    fn test_not_injective() {
        let report = validate_bijection(&[('a', 1), ('b', 2), ('c', 1)], None).unwrap_err();
        assert_eq!(
            report.violations(),
            &[Violation::NotInjective(NotInjective {
                duplicated: vec![1],
                pairs: vec![('a', 1), ('c', 1)],
            })]
        );
    }

    #[test]
    fn test_not_surjective() {
        let report = validate_bijection(&[('a', 1), ('b', 2)], Some(&[1, 2, 3])).unwrap_err();
        assert_eq!(
            report.violations(),
            &[Violation::NotSurjective(NotSurjective { missing: vec![3] })]
        );
    }

    #[test]
    fn test_all_violations_reported() {
        // Fails function, injectiveness and surjectiveness at once
        let pairs = [(1, 'a'), (1, 'b'), (2, 'b')];
        let report = validate_bijection(&pairs, Some(&['a', 'b', 'c'])).unwrap_err();

        let kinds: alloc::vec::Vec<_> = report.iter().map(Violation::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::NotAFunction,
                ViolationKind::NotInjective,
                ViolationKind::NotSurjective,
            ]
        );
    }

    #[test]
    fn test_validate_with_declared_domain() {
        let pairs = [('a', 1), ('b', 2)];
        let domain = ['a', 'b', 'c'];
        let declared = Declared {
            domain: Some(&domain[..]),
            codomain: None,
        };
        let report = validate_with(&pairs, &declared).unwrap_err();
        assert!(report.contains(ViolationKind::NotTotal));
        assert_eq!(report.len(), 1);

        assert_eq!(validate_with(&pairs, &Declared::none()), Ok(()));
        assert_eq!(validate_with(&pairs, &Declared::codomain(&[1, 2])), Ok(()));
    }

    #[test]
    fn test_empty_markers_form_a_bijection() {
        let pairs = [
            (Value::from(1), Value::Undefined),
            (Value::Undefined, Value::from(2)),
            (Value::from(4), Value::Null),
        ];
        assert_eq!(validate_bijection(&pairs, None), Ok(()));
    }
}
