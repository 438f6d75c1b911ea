//! Testing utilities for rendered markup
//!
//! - [`assert_balanced`] checks that every opened element is closed in order
//! - [`assert_in_order`] checks that fragments appear in sequence

pub mod assertions;

pub use assertions::*;
