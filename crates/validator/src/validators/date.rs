//! Date validator.
//!
//! Accepts anything that denotes a valid point in time: epoch
//! milliseconds or a date string in one of the common interchange
//! formats. Booleans never count as dates.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Largest distance from the epoch, in milliseconds, of a representable date.
pub const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Date-time layouts accepted in addition to RFC 3339 and RFC 2822.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

crate::primitive! {
    /// Validates that a value can be interpreted as a date.
    ///
    /// Supports:
    /// - epoch milliseconds within ±8.64e15
    /// - RFC 3339 (`2016-11-01T10:00:00Z`)
    /// - RFC 2822 (`Tue, 1 Nov 2016 10:00:00 GMT`)
    /// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    /// - `YYYY-MM-DDTHH:MM[:SS[.fff]]` with an optional `Z` or `±HH:MM` zone
    /// - `YYYY-MM-DD HH:MM[:SS[.fff]]`
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_validator::validators::DateType;
    /// use atlas_validator::foundation::Validate;
    /// use serde_json::json;
    ///
    /// assert!(DateType.check(&json!("2016-11-01")).is_ok());
    /// assert!(DateType.check(&json!(1_478_000_000_000_i64)).is_ok());
    /// assert!(DateType.check(&json!(true)).is_err());
    /// assert!(DateType.check(&json!("yesterday")).is_err());
    /// ```
    pub DateType;
    rule(input) { is_valid_date(input) }
    expect "date";
    fn date();
}

fn is_valid_date(value: &Value) -> bool {
    match value {
        Value::Bool(_) => false,
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|ms| ms.is_finite() && ms.abs() <= MAX_EPOCH_MILLIS),
        Value::String(s) => parses_as_date(s.trim()),
        // null is the epoch
        Value::Null => true,
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Zoned date-time layouts; a trailing `Z` is read as `+00:00`.
const ZONED_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];

fn parses_as_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || parses_as_zoned(s)
        || parses_as_calendar_date(s)
        || NAIVE_DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(s, format).is_ok())
}

fn parses_as_zoned(s: &str) -> bool {
    let s = match s.strip_suffix(['Z', 'z']) {
        Some(local) => Cow::Owned(format!("{local}+00:00")),
        None => Cow::Borrowed(s),
    };
    ZONED_DATE_TIME_FORMATS
        .iter()
        .any(|format| DateTime::parse_from_str(&s, format).is_ok())
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; missing parts default to the first.
fn parses_as_calendar_date(s: &str) -> bool {
    let is_year = |year: &str| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit());
    let padded = match s.split('-').collect::<Vec<_>>().as_slice() {
        [year] if is_year(year) => format!("{year}-01-01"),
        [year, month] if is_year(year) && month.len() == 2 => format!("{year}-{month}-01"),
        [year, _, _] if is_year(year) => s.to_owned(),
        _ => return false,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").is_ok()
}
