//! REQUIRED combinator - rejects null and missing values
//!
//! Every validator is optional by default. [`required`] re-tags a
//! validator as [`Validator::Required`], which the dispatcher consults
//! before deciding whether an absent value may skip validation.
//!
//! # Examples
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let name = assert(shape! { "name" => required(string()) }, AssertOptions::default());
//! assert_eq!(name.check(&json!({})).unwrap_err().message(), "name is required.");
//! ```

use crate::foundation::{Failure, Validator};
use crate::format::{FormatOptions, format_error_message, is_array_culprit};

/// Marks a validator as rejecting `null` and missing values.
///
/// Present values are delegated to `validator` unchanged.
#[must_use]
pub fn required(validator: Validator) -> Validator {
    validator.into_required()
}

/// The failure reported for an absent value under [`required`].
///
/// Phrasing depends on where the value sits, so the message is rendered
/// once the final path is known:
///
/// - `{path} is required.`
/// - `Item at position {path} cannot be undefined/null.` for positional paths
pub(crate) fn missing_value() -> Failure {
    Failure::custom(render_missing)
}

fn render_missing(options: &FormatOptions) -> String {
    let tail = if is_array_culprit(options.path()) {
        "cannot be undefined/null."
    } else {
        "is required."
    };
    format_error_message(options, tail)
}
