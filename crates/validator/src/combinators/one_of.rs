//! ONE OF combinators - unions of validators and of literal values
//!
//! [`one_of_type`] accepts a value if any alternative accepts it.
//! [`one_of`] is the enum form: each alternative is an
//! [`equal`](crate::validators::equal) check on a literal.
//!
//! # Examples
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let padding = assert(one_of_type![number(), string()], AssertOptions::default());
//! assert!(padding.check(&json!("10px")).is_ok());
//! assert_eq!(
//!     padding.check(&json!(true)).unwrap_err().message(),
//!     "value must be a number or string."
//! );
//! ```

use serde_json::Value;

use crate::foundation::{Failure, Validate, Validator, validate};
use crate::format::or_list;
use crate::validators::equal;

/// Passes if at least one alternative passes.
///
/// When every alternative fails:
///
/// - all failures are bare phrases: they are merged into one phrase,
///   `a, b or c`
/// - otherwise: the failure with the longest path is reported, the first
///   one winning ties
#[derive(Debug, Clone)]
pub struct OneOfType {
    alternatives: Vec<Validator>,
}

impl OneOfType {
    /// Creates a new ONE OF TYPE combinator.
    pub fn new<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Validator>,
    {
        Self {
            alternatives: alternatives.into_iter().collect(),
        }
    }

    /// Returns the alternatives in declared order.
    pub fn alternatives(&self) -> &[Validator] {
        &self.alternatives
    }
}

impl Validate for OneOfType {
    fn check(&self, value: &Value) -> Result<(), Failure> {
        let mut failures = Vec::with_capacity(self.alternatives.len());

        for alternative in &self.alternatives {
            match validate(alternative, Some(value)) {
                Ok(()) => return Ok(()),
                Err(failure) => failures.push(failure),
            }
        }

        let phrases: Option<Vec<&str>> = failures.iter().map(Failure::as_text).collect();
        if let Some(phrases) = phrases {
            return Err(Failure::text(or_list(&phrases)));
        }

        Err(failures
            .into_iter()
            .reduce(|longest, failure| {
                if failure.path().len() > longest.path().len() {
                    failure
                } else {
                    longest
                }
            })
            .unwrap_or_else(|| Failure::text(String::new())))
    }
}

/// Creates a ONE OF TYPE combinator from an ordered list of validators.
///
/// See [`one_of_type!`](crate::one_of_type!) for the variadic form.
#[must_use]
pub fn one_of_type<I>(alternatives: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    Validator::plain(OneOfType::new(alternatives))
}

/// Creates a union of literal values.
///
/// See [`one_of!`](crate::one_of!) for the variadic form.
///
/// # Examples
///
/// ```
/// use atlas_validator::combinators::one_of;
/// use atlas_validator::foundation::validate;
/// use serde_json::json;
///
/// let format = one_of(["png", "jpg"]);
/// assert!(validate(&format, Some(&json!("jpg"))).is_ok());
/// let failure = validate(&format, Some(&json!("gif"))).unwrap_err();
/// assert_eq!(failure.as_text(), Some("\"png\" or \"jpg\""));
/// ```
#[must_use]
pub fn one_of<I, T>(values: I) -> Validator
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    one_of_type(values.into_iter().map(equal))
}

// ============================================================================
// TESTS
// ============================================================================
