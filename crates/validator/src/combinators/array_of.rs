//! ARRAY OF combinator - validates every element of an array

use serde_json::Value;

use crate::foundation::{Failure, Validate, Validator, validate};
use crate::validators::PlainArray;

// ============================================================================
// ARRAY OF COMBINATOR
// ============================================================================

/// Validates that a value is an array whose elements all pass `item`.
///
/// Stops at the first failing element and reports its index. `null`
/// elements follow the usual rule: they pass unless `item` is
/// [`required`](crate::combinators::required).
///
/// # Examples
///
/// ```
/// use atlas_validator::prelude::*;
/// use serde_json::json;
///
/// let bbox = array_of(number());
/// assert!(validate(&bbox, Some(&json!([1, 2, 3, 4]))).is_ok());
///
/// let failure = validate(&bbox, Some(&json!([1, "2", "3"]))).unwrap_err();
/// assert_eq!(failure.path(), &[PathSegment::Index(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayOf {
    item: Validator,
}

impl ArrayOf {
    /// Creates a new ARRAY OF combinator.
    pub fn new(item: Validator) -> Self {
        Self { item }
    }

    /// Returns a reference to the element validator.
    pub fn item(&self) -> &Validator {
        &self.item
    }
}

impl Validate for ArrayOf {
    fn check(&self, value: &Value) -> Result<(), Failure> {
        let Value::Array(elements) = value else {
            return Err(Failure::text(PlainArray::EXPECTED));
        };

        elements
            .iter()
            .enumerate()
            .try_for_each(|(index, element)| {
                validate(&self.item, Some(element)).map_err(|failure| failure.prefixed(index))
            })
    }
}

/// Creates an ARRAY OF combinator.
#[must_use]
pub fn array_of(item: Validator) -> Validator {
    Validator::plain(ArrayOf::new(item))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::PathSegment;
    use crate::validators::{number, range, string};
    use serde_json::json;

    #[test]
    fn test_array_of_all_valid() {
        let validator = array_of(string());
        assert!(validate(&validator, Some(&json!(["a", "b"]))).is_ok());
    }

    #[test]
    fn test_array_of_empty() {
        let validator = array_of(string());
        assert!(validate(&validator, Some(&json!([]))).is_ok());
    }

    #[test]
    fn test_array_of_not_an_array() {
        let validator = array_of(string());
        let failure = validate(&validator, Some(&json!({ "0": "a" }))).unwrap_err();
        assert!(failure.path().is_empty());
        assert_eq!(failure.as_text(), Some("array"));
    }

    #[test]
    fn test_array_of_reports_first_failure_only() {
        let validator = array_of(range(0, 5));
        let failure = validate(&validator, Some(&json!([1, 9, "x", 7]))).unwrap_err();
        assert_eq!(failure.path(), &[PathSegment::Index(1)]);
    }

    #[test]
    fn test_array_of_null_elements_are_optional() {
        let validator = array_of(number());
        assert!(validate(&validator, Some(&json!([1, null, 2]))).is_ok());
    }

    #[test]
    fn test_nested_arrays_build_full_path() {
        let validator = array_of(array_of(number()));
        let failure = validate(&validator, Some(&json!([[1], [2, "x"]]))).unwrap_err();
        assert_eq!(
            failure.path(),
            &[PathSegment::Index(1), PathSegment::Index(1)]
        );
    }
}
