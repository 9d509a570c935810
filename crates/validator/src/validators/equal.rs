//! Literal equality validator

use serde_json::Value;

crate::primitive! {
    /// Validates that a value equals a fixed JSON literal.
    ///
    /// Comparison is structural, so `[1, 2]` equals `[1, 2]`. The failure
    /// phrase is the compact JSON text of the expected literal, which
    /// renders as `"png"` for strings and `3` for both `3` and `3.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_validator::validators::Equal;
    /// use atlas_validator::foundation::Validate;
    /// use serde_json::json;
    ///
    /// let v = Equal::new(json!("png"));
    /// assert!(v.check(&json!("png")).is_ok());
    /// assert_eq!(v.check(&json!("jpg")).unwrap_err().as_text(), Some("\"png\""));
    /// ```
    pub Equal { expected: Value };
    rule(self, input) { literal_eq(input, &self.expected) }
    expect(self) { crate::format::format_literal(&self.expected) }
}

/// Strict equality that treats `1` and `1.0` as the same number.
fn literal_eq(value: &Value, expected: &Value) -> bool {
    match (value, expected) {
        (Value::Number(a), Value::Number(b)) => a == b || a.as_f64() == b.as_f64(),
        _ => value == expected,
    }
}

/// Creates an [`Equal`] validator for anything convertible into JSON.
#[must_use]
pub fn equal(expected: impl Into<Value>) -> crate::foundation::Validator {
    crate::foundation::Validator::plain(Equal::new(expected.into()))
}
