#![no_std]

//! biject-core - Bijection rules for pair lists
//!
//! This crate provides the pure building blocks for runtime-checked
//! bijections: pair list utilities, a dynamic value type with two distinct
//! empty markers, the violation taxonomy, the validator and the lookup
//! trait. No I/O and no logging.

extern crate alloc;

pub mod error;
pub mod pairs;
pub mod traits;
pub mod validation;
pub mod value;

pub use error::*;
pub use pairs::{domain, flip, image, invert, Pair};
pub use traits::*;
pub use validation::{
    check_closure, check_function, check_injective, check_surjective, check_total, find_unclosed,
    is_bijection, validate_bijection, validate_with, Declared,
};
pub use value::Value;
