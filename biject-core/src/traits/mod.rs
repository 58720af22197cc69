//! Abstract interfaces for bidirectional maps
//!
//! Traits are pure interfaces - no concrete implementations.

pub mod lookup;

pub use lookup::BidirectionalLookup;
