//! Round-trip contracts for built lookups
//!
//! These checks run against an already-built [`BidirectionalLookup`] and the
//! pairs it was built from. They hold for every map built from a valid
//! bijection; a best-effort map built from an invalid list may break them.

use crate::pairs::Pair;
use crate::traits::BidirectionalLookup;

/// Position of the first pair that does not round-trip through `lookup`
///
/// A pair `(l, r)` round-trips when `map(l) == r` and `invert(r) == l`.
pub fn find_unclosed<B>(lookup: &B, pairs: &[Pair<B::Left, B::Right>]) -> Option<usize>
where
    B: BidirectionalLookup + ?Sized,
    B::Left: PartialEq,
    B::Right: PartialEq,
{
    pairs.iter().position(|(left, right)| {
        lookup.map(left) != Some(right) || lookup.invert(right) != Some(left)
    })
}

/// Check that every pair round-trips and that the lookup holds nothing else
pub fn check_closure<B>(lookup: &B, pairs: &[Pair<B::Left, B::Right>]) -> bool
where
    B: BidirectionalLookup + ?Sized,
    B::Left: PartialEq,
    B::Right: PartialEq,
{
    find_unclosed(lookup, pairs).is_none() && lookup.len() == pairs.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear-scan lookup, enough to exercise the contracts
    struct Scan<'a>(&'a [(u8, char)]);

    impl BidirectionalLookup for Scan<'_> {
        type Left = u8;
        type Right = char;

        fn map(&self, left: &u8) -> Option<&char> {
            self.0.iter().rev().find(|(l, _)| l == left).map(|(_, r)| r)
        }

        fn invert(&self, right: &char) -> Option<&u8> {
            self.0.iter().rev().find(|(_, r)| r == right).map(|(l, _)| l)
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    #[test]
    fn test_closure_holds_for_bijection() {
        let pairs = [(1, 'a'), (2, 'b'), (3, 'c')];
        let lookup = Scan(&pairs);
        assert_eq!(find_unclosed(&lookup, &pairs), None);
        assert!(check_closure(&lookup, &pairs));
        assert!(lookup.is_in_domain(&2));
        assert!(!lookup.is_in_image(&'z'));
    }

    #[test]
    fn test_closure_breaks_on_overwrite() {
        // Later pair shadows the first one for key 1
        let pairs = [(1, 'a'), (2, 'b'), (1, 'c')];
        let lookup = Scan(&pairs);
        assert_eq!(find_unclosed(&lookup, &pairs), Some(0));
        assert!(!check_closure(&lookup, &pairs));
    }
}
