//! biject - Immutable bidirectional maps with runtime bijection checks
//!
//! This library builds a dual-indexed lookup structure from an explicit
//! list of `(left, right)` pairs and answers forward and inverse queries in
//! O(1). Before building, the pair list can be validated as a bijection:
//! a total function, injective, and optionally surjective onto a declared
//! codomain.
//!
//! ## Architecture
//!
//! - **biject-core**: pair utilities, the dynamic [`Value`] type, violation
//!   types and the validator (pure, `no_std`)
//! - **biject**: the [`BidirectionalMap`], construction modes, logging and
//!   serde support
//!
//! ## Quick Start
//!
//! ```rust
//! use biject::{biject, Value};
//!
//! let map = biject(vec![
//!     (Value::from(1), Value::Undefined),
//!     (Value::Undefined, Value::from(2)),
//!     (Value::from(4), Value::Null),
//! ])
//! .expect("pairs form a bijection");
//!
//! assert_eq!(map.map(&Value::from(4)), Some(&Value::Null));
//! assert_eq!(map.map(&Value::from(5)), None);
//! assert!(map.is_in_domain(&Value::Undefined));
//! assert!(!map.is_in_domain(&Value::Null));
//! ```
//!
//! ## Construction modes
//!
//! - **Strict** ([`biject`], [`biject_onto`], [`BidirectionalMap::try_new`]):
//!   validate first and return an [`InvalidBijectionError`] listing every
//!   violation
//! - **Permissive** ([`BidirectionalMap::new`]): build directly; later pairs
//!   overwrite earlier ones sharing a key

// Re-export core abstractions
pub use biject_core::{
    // Lookup trait
    BidirectionalLookup,
    // Violations
    NotAFunction, NotInjective, NotSurjective, NotTotal, Violation, ViolationKind, ViolationReport,
    // Validation
    check_closure, check_function, check_injective, check_surjective, check_total,
    is_bijection, validate_bijection, validate_with, Declared,
    // Pairs and values
    Pair, Value,
};

pub mod bidirectional_map;
pub mod config;
pub mod error;
#[cfg(feature = "serde")]
mod serde_support;

pub use bidirectional_map::BidirectionalMap;
pub use config::{BijectConfig, Mode};
pub use error::InvalidBijectionError;

use std::hash::Hash;

/// Build a map from pairs that must form a bijection
pub fn biject<L, R, I>(pairs: I) -> Result<BidirectionalMap<L, R>, InvalidBijectionError<L, R>>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
    I: IntoIterator<Item = (L, R)>,
{
    BidirectionalMap::try_new(pairs)
}

/// Build a map from pairs that must form a bijection onto `codomain`
pub fn biject_onto<L, R, I, C>(
    pairs: I,
    codomain: C,
) -> Result<BidirectionalMap<L, R>, InvalidBijectionError<L, R>>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
    I: IntoIterator<Item = (L, R)>,
    C: IntoIterator<Item = R>,
{
    BidirectionalMap::try_onto(pairs, codomain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biject() {
        let map = biject(vec![('a', 3), ('c', 2), ('b', 1)]).unwrap();
        assert_eq!(map.map(&'c'), Some(&2));
        assert_eq!(map.invert(&1), Some(&'b'));

        let err = biject(vec![(1, 'c'), (2, 'a'), (3, 'e'), (1, 'b'), (3, 'd')]).unwrap_err();
        match &err.violations()[0] {
            Violation::NotAFunction(v) => {
                assert_eq!(v.duplicated, vec![1, 3]);
                assert_eq!(v.pairs, vec![(1, 'c'), (3, 'e'), (1, 'b'), (3, 'd')]);
            }
            other => panic!("unexpected violation {other:?}"),
        }
    }

    #[test]
    fn test_biject_onto() {
        let codomain = ["FIRST", "SECOND", "THIRD"];
        let map = biject_onto(vec![('a', "FIRST"), ('b', "SECOND"), ('c', "THIRD")], codomain);
        assert!(map.is_ok());

        let err = biject_onto(vec![('a', "FIRST"), ('b', "SECOND")], codomain).unwrap_err();
        match &err.violations()[0] {
            Violation::NotSurjective(v) => assert_eq!(v.missing, vec!["THIRD"]),
            other => panic!("unexpected violation {other:?}"),
        }
    }

    #[test]
    fn test_lookup_through_trait_object() {
        let map = biject(vec![(1u8, 'x'), (2, 'y')]).unwrap();
        let lookup: &dyn BidirectionalLookup<Left = u8, Right = char> = &map;
        assert_eq!(lookup.map(&2), Some(&'y'));
        assert!(lookup.is_in_image(&'x'));
        assert!(!lookup.is_in_domain(&3));
        assert!(check_closure(lookup, &[(1, 'x'), (2, 'y')]));
    }
}
