//! SHAPE combinator - validates the keys of a JSON object
//!
//! A shape is an allow-list schema: each declared key is validated with its
//! own validator, keys the schema does not mention are ignored. Unlike
//! [`array_of`](crate::combinators::array_of), a shape checks every key and
//! reports all failing keys together.

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{Failure, Validate, Validator, join_path, validate};
use crate::format::{FormatOptions, process_message};
use crate::validators::PlainObject;

// ============================================================================
// SHAPE COMBINATOR
// ============================================================================

/// Validates the declared keys of a JSON object.
///
/// - one failing key: its failure is returned as if it were the only check
/// - several failing keys: one aggregate message listing every key in
///   declared order
///
/// # Examples
///
/// ```
/// use atlas_validator::prelude::*;
/// use serde_json::json;
///
/// let point = assert(
///     shape! { "lng" => number(), "lat" => number() },
///     AssertOptions::default(),
/// );
///
/// let err = point.check(&json!({ "lng": "x", "lat": "y" })).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "The following keys of value did not pass validation:\n  \
///      >lng: lng must be a number.\n  \
///      >lat: lat must be a number."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Shape {
    fields: IndexMap<String, Validator>,
}

impl Shape {
    /// Creates a SHAPE combinator from `(key, validator)` pairs.
    ///
    /// Keys keep their declared order; a repeated key replaces the earlier
    /// validator in place.
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Validator)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Returns the declared keys and their validators.
    pub fn fields(&self) -> &IndexMap<String, Validator> {
        &self.fields
    }
}

impl Validate for Shape {
    fn check(&self, value: &Value) -> Result<(), Failure> {
        let Value::Object(object) = value else {
            return Err(Failure::text(PlainObject::EXPECTED));
        };

        let mut failures: Vec<Failure> = self
            .fields
            .iter()
            .filter_map(|(key, validator)| {
                validate(validator, object.get(key))
                    .err()
                    .map(|failure| failure.prefixed(key.as_str()))
            })
            .collect();

        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            count => {
                tracing::trace!(count, "multiple shape keys failed validation");
                Err(Failure::custom(move |options| {
                    render_key_failures(&failures, options)
                }))
            }
        }
    }
}

/// Renders the aggregate report for several failing keys.
///
/// Each key's failure is rendered on its own line, relative to the shape,
/// and indented one level further than the header so nested reports stay
/// readable.
fn render_key_failures(failures: &[Failure], options: &FormatOptions) -> String {
    let mut report = format!(
        "The following keys of {} did not pass validation:",
        join_path(options.path())
    );
    for failure in failures {
        let key = failure
            .path()
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        let message = process_message(failure, options).replace('\n', "\n  ");
        report.push_str(&format!("\n  >{key}: {message}"));
    }
    report
}

/// Creates a SHAPE combinator.
///
/// # Examples
///
/// ```
/// use atlas_validator::combinators::{required, shape};
/// use atlas_validator::foundation::validate;
/// use atlas_validator::validators::{number, string};
/// use serde_json::json;
///
/// let marker = shape([("label", string()), ("size", required(number()))]);
/// assert!(validate(&marker, Some(&json!({ "size": 2, "extra": true }))).is_ok());
/// ```
#[must_use]
pub fn shape<I, K>(fields: I) -> Validator
where
    I: IntoIterator<Item = (K, Validator)>,
    K: Into<String>,
{
    Validator::plain(Shape::new(fields))
}

// ============================================================================
// TESTS
// ============================================================================
