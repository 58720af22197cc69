//! Bidirectional lookup abstraction
//!
//! This module defines the read-only interface every bidirectional map
//! implementation provides, regardless of how its indexes are stored.

/// Read-only two-way lookup over a finite set of pairs
///
/// Implementations must be side-effect free: repeated calls with the same
/// argument return the same answer.
pub trait BidirectionalLookup {
    /// Left side (domain) value type
    type Left;
    /// Right side (image) value type
    type Right;

    /// Get the right value paired with `left`
    ///
    /// Returns `None` when `left` is not in the domain. A stored right value
    /// that happens to be an empty marker is still `Some`.
    fn map(&self, left: &Self::Left) -> Option<&Self::Right>;

    /// Get the left value paired with `right`
    ///
    /// Returns `None` when `right` is not in the image.
    fn invert(&self, right: &Self::Right) -> Option<&Self::Left>;

    /// Check whether `value` is a key of the forward index
    fn is_in_domain(&self, value: &Self::Left) -> bool {
        self.map(value).is_some()
    }

    /// Check whether `value` is a key of the backward index
    fn is_in_image(&self, value: &Self::Right) -> bool {
        self.invert(value).is_some()
    }

    /// Get the number of domain elements
    fn len(&self) -> usize;

    /// Check whether the domain is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
