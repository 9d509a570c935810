//! Prelude module for convenient imports.
//!
//! Provides a single `use atlas_validator::prelude::*;` import that brings
//! in the validator types, every built-in validator and combinator, the
//! schema macros and the assertion API.
//!
//! # Examples
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let bbox = array_of(range(-180, 180));
//! assert!(validate(&bbox, Some(&json!([-10, 20]))).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core types and the dispatcher
// ============================================================================

pub use crate::foundation::{Failure, PathSegment, Payload, Validate, Validator, join_path, validate};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    boolean, coordinates, date, equal, number, plain_array, plain_object, range, string,
};

// ============================================================================
// COMBINATORS: Composition functions and macros
// ============================================================================

pub use crate::combinators::{array_of, one_of, one_of_type, required, shape};
pub use crate::{one_of, one_of_type, shape};

// ============================================================================
// ASSERTIONS AND FORMATTING
// ============================================================================

pub use crate::assert::{AssertOptions, Assertion, AssertionError, assert};
pub use crate::format::{FormatOptions, process_message};
