//! Combinators for building schemas out of validators
//!
//! Every combinator takes [`Validator`](crate::foundation::Validator)
//! handles and returns a new one, so schemas nest freely:
//!
//! - **Presence**: [`required`] - absent values fail instead of passing
//! - **Arrays**: [`array_of`] - every element must pass
//! - **Objects**: [`shape`] - each declared key is checked with its own validator
//! - **Unions**: [`one_of_type`], [`one_of`] - any alternative may pass
//!
//! # Examples
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let directions = shape! {
//!     "profile" => required(one_of!["driving", "walking", "cycling"]),
//!     "waypoints" => required(array_of(coordinates())),
//! };
//!
//! let assertion = assert(directions, AssertOptions::default());
//! assert!(assertion
//!     .check(&json!({ "profile": "walking", "waypoints": [[-122.4, 37.8], [-122.3, 37.7]] }))
//!     .is_ok());
//! ```

pub mod array_of;
pub mod one_of;
pub mod required;
pub mod shape;

// Re-export all combinator types
pub use array_of::{ArrayOf, array_of};
pub use one_of::{OneOfType, one_of, one_of_type};
pub use required::required;
pub use shape::{Shape, shape};

// ============================================================================
// COMBINATOR LAWS
// ============================================================================
