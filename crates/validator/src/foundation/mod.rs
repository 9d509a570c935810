//! Core validation types and the dispatcher
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], and the [`Validator`] handle built on it
//! - **Failures**: [`Failure`], [`Payload`], [`PathSegment`]
//! - **Dispatcher**: [`validate`]
//!
//! # Architecture
//!
//! ## 1. Optional by default
//!
//! `null` and missing values pass every validator unless it was wrapped
//! in [`required`](crate::combinators::required). The rule is applied by
//! the dispatcher at every level of nesting, so a schema only has to say
//! which fields must be present:
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let zoom = number();
//! assert!(validate(&zoom, None).is_ok());
//! assert!(validate(&zoom, Some(&json!(null))).is_ok());
//! assert!(validate(&required(number()), None).is_err());
//! ```
//!
//! ## 2. Path-tracking failures
//!
//! Combinators prepend the key or index they descended through, so the
//! failure that reaches the caller names exactly which value was wrong:
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let stops = shape! { "stops" => array_of(string()) };
//! let failure = validate(&stops, Some(&json!({ "stops": ["a", 2] }))).unwrap_err();
//! assert_eq!(join_path(failure.path()), "stops.1");
//! ```

pub mod failure;
pub mod traits;

pub use failure::{CustomRender, Failure, Path, PathSegment, Payload, join_path};
pub use traits::{Validate, Validator};

use serde_json::Value;

/// Runs a validator against a possibly-absent value.
///
/// `None` stands for a missing key and is treated exactly like
/// `Some(&Value::Null)`. Absent values pass [`Validator::Plain`] without
/// running it and fail [`Validator::Required`]; present values are handed
/// to the validator's own logic.
///
/// # Returns
///
/// * `Ok(())` if the value is acceptable
/// * `Err(Failure)` with the path relative to `value`
pub fn validate(validator: &Validator, value: Option<&Value>) -> Result<(), Failure> {
    match (validator, value.filter(|v| !v.is_null())) {
        (_, Some(present)) => validator.rule().check(present),
        (Validator::Plain(_), None) => Ok(()),
        (Validator::Required(_), None) => Err(crate::combinators::required::missing_value()),
    }
}

/// A validation result using [`Failure`].
pub type ValidationResult<T> = Result<T, Failure>;

// ============================================================================
// TESTS
// ============================================================================
