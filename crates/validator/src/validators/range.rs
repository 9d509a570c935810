//! Numeric range validator

crate::primitive! {
    /// Validates that a value is a number within an inclusive range.
    ///
    /// Non-numbers fail with the same phrase as out-of-range numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_validator::validators::Range;
    /// use atlas_validator::foundation::Validate;
    /// use serde_json::json;
    ///
    /// let zoom = Range::new(0.0, 22.0);
    /// assert!(zoom.check(&json!(14.5)).is_ok());
    /// assert_eq!(
    ///     zoom.check(&json!(23)).unwrap_err().as_text(),
    ///     Some("number between 0 & 22 (inclusive)")
    /// );
    /// ```
    #[derive(Copy, PartialEq)]
    pub Range { min: f64, max: f64 };
    rule(self, input) { input.as_f64().is_some_and(|n| n >= self.min && n <= self.max) }
    expect(self) {
        format!(
            "number between {} & {} (inclusive)",
            crate::format::format_number(self.min),
            crate::format::format_number(self.max)
        )
    }
}

/// Creates a [`Range`] validator; bounds are inclusive.
#[must_use]
pub fn range(min: impl Into<f64>, max: impl Into<f64>) -> crate::foundation::Validator {
    crate::foundation::Validator::plain(Range::new(min.into(), max.into()))
}

// ============================================================================
// TESTS
// ============================================================================
