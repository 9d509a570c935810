//! Core traits for the validation system
//!
//! This module defines the [`Validate`] trait every check implements and
//! the [`Validator`] handle combinators pass around.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::Failure;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The logic of a single validator.
///
/// `check` is only ever called with a present value: `null` and missing
/// keys are resolved by [`validate`](crate::foundation::validate) before
/// the validator runs. Implementations must be pure, since one validator
/// tree is shared by every validation that uses it.
///
/// # Examples
///
/// ```
/// use atlas_validator::foundation::{Failure, Validate, Validator, validate};
/// use serde_json::{Value, json};
///
/// #[derive(Debug)]
/// struct NonEmptyString;
///
/// impl Validate for NonEmptyString {
///     fn check(&self, value: &Value) -> Result<(), Failure> {
///         match value.as_str() {
///             Some(s) if !s.is_empty() => Ok(()),
///             _ => Err(Failure::text("non-empty string")),
///         }
///     }
/// }
///
/// let validator = Validator::plain(NonEmptyString);
/// assert!(validate(&validator, Some(&json!("x"))).is_ok());
/// assert!(validate(&validator, Some(&json!(""))).is_err());
/// ```
pub trait Validate: Send + Sync {
    /// Checks a present value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value is acceptable
    /// * `Err(Failure)` describing what was expected, and where
    fn check(&self, value: &Value) -> Result<(), Failure>;
}

// ============================================================================
// VALIDATOR HANDLE
// ============================================================================

/// A shareable validator, tagged with its null-handling capability.
///
/// `Plain` validators accept `null` and missing values without running.
/// `Required` validators reject them; everything else is delegated to the
/// wrapped logic unchanged.
#[derive(Clone)]
pub enum Validator {
    /// Optional-by-default validator.
    Plain(Arc<dyn Validate>),
    /// Validator that treats `null` / missing as a failure.
    Required(Arc<dyn Validate>),
}

impl Validator {
    /// Wraps validation logic as an optional-by-default validator.
    pub fn plain(rule: impl Validate + 'static) -> Self {
        Self::Plain(Arc::new(rule))
    }

    /// Builds a validator from a closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_validator::foundation::{Failure, Validator, validate};
    /// use serde_json::json;
    ///
    /// let even = Validator::from_fn(|value| match value.as_u64() {
    ///     Some(n) if n % 2 == 0 => Ok(()),
    ///     _ => Err(Failure::text("even number")),
    /// });
    /// assert!(validate(&even, Some(&json!(4))).is_ok());
    /// assert!(validate(&even, Some(&json!(3))).is_err());
    /// ```
    pub fn from_fn<F>(check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), Failure> + Send + Sync + 'static,
    {
        Self::plain(FnValidator(check))
    }

    /// Returns `true` when `null` / missing values are rejected.
    #[must_use]
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required(_))
    }

    /// The wrapped validation logic.
    #[must_use]
    pub fn rule(&self) -> &dyn Validate {
        match self {
            Self::Plain(rule) | Self::Required(rule) => rule.as_ref(),
        }
    }

    /// Re-tags the same logic as [`Validator::Required`].
    #[must_use]
    pub fn into_required(self) -> Self {
        match self {
            Self::Plain(rule) | Self::Required(rule) => Self::Required(rule),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_required() { "Required" } else { "Plain" };
        f.debug_tuple(name).field(&"<validator>").finish()
    }
}

/// Adapter for closure-based validators.
struct FnValidator<F>(F);

impl<F> Validate for FnValidator<F>
where
    F: Fn(&Value) -> Result<(), Failure> + Send + Sync,
{
    fn check(&self, value: &Value) -> Result<(), Failure> {
        (self.0)(value)
    }
}
