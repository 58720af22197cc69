//! Dynamically typed values for heterogeneous pair lists
//!
//! [`Value`] lets a single pair list mix numbers, strings, booleans, lists and
//! the two empty markers, [`Value::Undefined`] and [`Value::Null`]. The empty
//! markers are ordinary data: each is equal only to itself.
//!
//! Equality follows two rules:
//!
//! - primitives compare by value (numbers use SameValueZero, so `NaN` equals
//!   `NaN` and `0.0` equals `-0.0`)
//! - lists compare by identity: two lists are equal only when they are clones
//!   of the same allocation, never because their elements match

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use by_address::ByThinAddress;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Canonical bit pattern shared by every NaN
const CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

/// A dynamically typed pair element
#[derive(Clone)]
pub enum Value {
    /// First empty marker
    Undefined,
    /// Second empty marker, distinct from `Undefined`
    Null,
    Bool(bool),
    Number(f64),
    Str(Arc<str>),
    /// Structured value, compared by identity
    List(ByThinAddress<Arc<[Value]>>),
}

impl Value {
    /// Create a new list value with its own identity
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        Value::List(ByThinAddress(Arc::from(items)))
    }

    /// Check whether this value is one of the two empty markers
    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Get the elements of a list value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(&items.0),
            _ => None,
        }
    }

    /// Get the contents of a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the contents of a number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check whether two values share the same list allocation
    ///
    /// Always false for non-list values.
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }

    fn number_bits(n: f64) -> u64 {
        if n.is_nan() {
            CANONICAL_NAN
        } else if n == 0.0 {
            // Folds -0.0 onto 0.0
            0
        } else {
            n.to_bits()
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                Value::number_bits(*a) == Value::number_bits(*b)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => Value::number_bits(*n).hash(state),
            Value::Str(s) => s.hash(state),
            Value::List(items) => items.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => f.debug_list().entries(items.0.iter()).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Value::Str(Arc::from(&*c.encode_utf8(&mut buf)))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes [`Value::Undefined`]
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_empty_markers_are_distinct() {
        assert_eq!(Value::Undefined, Value::Undefined);
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Undefined, Value::Null);

        // Never equal to falsy primitives either
        for other in [Value::from(0), Value::from(""), Value::from(false)] {
            assert_ne!(Value::Undefined, other);
            assert_ne!(Value::Null, other);
        }
        assert!(Value::Null.is_empty_marker());
        assert!(!Value::from(0).is_empty_marker());
    }

    #[test]
    fn test_number_same_value_zero() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_eq!(Value::from(3), Value::from(3.0));
        assert_ne!(Value::from(5), Value::from("5"));
    }

    #[test]
    fn test_lists_compare_by_identity() {
        let stored = Value::list([Value::from(1), Value::from('c')]);
        let alias = stored.clone();
        let lookalike = Value::list([Value::from(1), Value::from('c')]);

        assert_eq!(stored, alias);
        assert!(stored.same_identity(&alias));
        assert_ne!(stored, lookalike);
        assert!(!stored.same_identity(&lookalike));

        // Empty lists still get distinct identities
        let empty: [Value; 0] = [];
        assert_ne!(Value::list(empty.clone()), Value::list(empty));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = hashbrown::HashSet::new();
        set.insert(Value::from(-0.0));
        set.insert(Value::from(f64::NAN));
        assert!(set.contains(&Value::from(0)));
        assert!(set.contains(&Value::from(f64::NAN)));
        assert!(!set.contains(&Value::Null));
    }

    #[test]
    fn test_debug_rendering() {
        let list = Value::list([Value::from(1), Value::from("c"), Value::Null]);
        assert_eq!(format!("{list:?}"), "[1, \"c\", null]");
        assert_eq!(format!("{}", Value::Undefined), "undefined");
        assert_eq!(format!("{}", Value::from("a")), "a");
    }

    #[test]
    fn test_accessors() {
        let list = Value::list([Value::from(1), Value::Null]);
        assert_eq!(list.as_list(), Some(&[Value::from(1), Value::Null][..]));
        assert_eq!(Value::from("a").as_list(), None);

        assert_eq!(Value::from("label").as_str(), Some("label"));
        assert_eq!(Value::Undefined.as_str(), None);

        assert_eq!(Value::from(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from("2.5").as_number(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some(4)), Value::from(4));
    }
}
