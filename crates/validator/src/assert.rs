//! Assertions - the caller-facing entry point
//!
//! An [`Assertion`] pairs a root validator with [`AssertOptions`] and turns
//! the engine's [`Failure`] into an [`AssertionError`] carrying the final,
//! human-readable message.
//!
//! # Examples
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let assertion = assert(
//!     shape! { "name" => required(string()) },
//!     AssertOptions::default().with_api_name("Styles.createStyle"),
//! );
//!
//! let err = assertion.check(&json!({ "name": 7 })).unwrap_err();
//! assert_eq!(err.to_string(), "Styles.createStyle: name must be a string.");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::foundation::{Failure, Path, PathSegment, Validator, join_path, validate};
use crate::format::{FormatOptions, process_message};

// ============================================================================
// OPTIONS
// ============================================================================

/// Configuration for an [`Assertion`].
///
/// Every field is optional, so options can be deserialized from partial
/// JSON:
///
/// ```
/// use atlas_validator::assert::AssertOptions;
///
/// let options: AssertOptions =
///     serde_json::from_str(r#"{ "api_name": "Tilesets.listTilesets" }"#).unwrap();
/// assert_eq!(options.api_name.as_deref(), Some("Tilesets.listTilesets"));
/// assert!(options.extensions.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertOptions {
    /// Name of the API call, prepended to every message as `"{api_name}: "`.
    pub api_name: Option<String>,

    /// Caller-defined values forwarded to custom message renders.
    pub extensions: Map<String, Value>,
}

impl AssertOptions {
    /// Sets the API name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_api_name(mut self, api_name: impl Into<String>) -> Self {
        self.api_name = Some(api_name.into());
        self
    }

    /// Adds an extension value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// ERROR
// ============================================================================

/// A rejected value.
///
/// `Display` is exactly the formatted message, API name prefix included.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
    api_name: Option<String>,
    path: Path,
}

impl AssertionError {
    /// The full message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// API name the assertion was configured with.
    #[must_use]
    pub fn api_name(&self) -> Option<&str> {
        self.api_name.as_deref()
    }

    /// Path of the failing value relative to the validated root.
    ///
    /// Empty when the root itself failed or when several object keys
    /// failed at once.
    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }
}

// ============================================================================
// ASSERTION
// ============================================================================

/// A reusable check built by [`assert`].
///
/// Holds only shared, immutable data: clone it freely and call it from any
/// thread.
#[derive(Debug, Clone)]
pub struct Assertion {
    root: Validator,
    options: AssertOptions,
}

impl Assertion {
    /// Validates a present value.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError`] with the formatted message if the value
    /// is rejected.
    pub fn check(&self, value: &Value) -> Result<(), AssertionError> {
        self.check_optional(Some(value))
    }

    /// Validates a possibly-missing value; `None` behaves like `null`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError`] with the formatted message if the value
    /// is rejected.
    pub fn check_optional(&self, value: Option<&Value>) -> Result<(), AssertionError> {
        validate(&self.root, value).map_err(|failure| self.reject(&failure))
    }

    /// Options this assertion was built with.
    #[must_use]
    pub fn options(&self) -> &AssertOptions {
        &self.options
    }

    fn reject(&self, failure: &Failure) -> AssertionError {
        let api_name = self.options.api_name.as_deref().filter(|name| !name.is_empty());
        let message = process_message(failure, &FormatOptions::from(&self.options));

        debug!(
            target: "atlas_validator::assert",
            api_name = api_name.unwrap_or_default(),
            path = %join_path(failure.path()),
            "value rejected"
        );

        AssertionError {
            message: match api_name {
                Some(name) => format!("{name}: {message}"),
                None => message,
            },
            api_name: self.options.api_name.clone(),
            path: failure.path().iter().cloned().collect(),
        }
    }
}

/// Builds an [`Assertion`] from a root validator.
#[must_use]
pub fn assert(root: Validator, options: AssertOptions) -> Assertion {
    Assertion { root, options }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{array_of, required, shape};
    use crate::validators::{number, range, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_valid_value_passes() {
        let assertion = assert(number(), AssertOptions::default());
        assert!(assertion.check(&json!(4)).is_ok());
        assert!(assertion.check_optional(None).is_ok());
    }

    #[test]
    fn test_error_message_and_path() {
        let assertion = assert(array_of(range(0, 5)), AssertOptions::default());
        let err = assertion.check(&json!([1, 10])).unwrap_err();
        assert_eq!(
            err.message(),
            "Item at position 1 must be a number between 0 & 5 (inclusive)."
        );
        assert_eq!(err.path(), &[PathSegment::Index(1)]);
        assert_eq!(err.api_name(), None);
    }

    #[test]
    fn test_api_name_prefix() {
        let assertion = assert(
            shape([("limit", number())]),
            AssertOptions::default().with_api_name("Datasets.listFeatures"),
        );
        let err = assertion.check(&json!({ "limit": "ten" })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Datasets.listFeatures: limit must be a number."
        );
        assert_eq!(err.api_name(), Some("Datasets.listFeatures"));
    }

    #[test]
    fn test_empty_api_name_adds_no_prefix() {
        let assertion = assert(string(), AssertOptions::default().with_api_name(""));
        let err = assertion.check(&json!(1)).unwrap_err();
        assert_eq!(err.message(), "value must be a string.");
    }

    #[test]
    fn test_missing_root() {
        let assertion = assert(required(string()), AssertOptions::default());
        assert_eq!(
            assertion.check_optional(None).unwrap_err().message(),
            "value is required."
        );
        assert_eq!(
            assertion.check(&Value::Null).unwrap_err().message(),
            "value is required."
        );
    }

    #[test]
    fn test_repeated_checks_are_identical() {
        let assertion = assert(
            shape([("a", number()), ("b", required(string()))]),
            AssertOptions::default(),
        );
        let value = json!({ "a": "x" });
        let first = assertion.check(&value).unwrap_err();
        let second = assertion.check(&value).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extensions_reach_custom_renders() {
        let tagged = crate::foundation::Validator::from_fn(|_| {
            Err(Failure::custom(|options: &FormatOptions| {
                let unit = options
                    .extension("unit")
                    .and_then(Value::as_str)
                    .unwrap_or("?");
                format!("{} must be given in {unit}.", join_path(options.path()))
            }))
        });
        let assertion = assert(
            shape([("radius", tagged)]),
            AssertOptions::default().with_extension("unit", "meters"),
        );
        let err = assertion.check(&json!({ "radius": 3 })).unwrap_err();
        assert_eq!(err.message(), "radius must be given in meters.");
    }

    #[test]
    fn test_options_round_trip_through_json() {
        let options = AssertOptions::default()
            .with_api_name("Uploads.createUpload")
            .with_extension("retries", 2);
        let encoded = serde_json::to_value(&options).unwrap();
        assert_eq!(
            encoded,
            json!({ "api_name": "Uploads.createUpload", "extensions": { "retries": 2 } })
        );
        let decoded: AssertOptions = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, options);
        let empty: AssertOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AssertOptions::default());
    }

    #[test]
    fn test_assertion_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Assertion>();
        assert_send_sync::<AssertionError>();
    }
}
