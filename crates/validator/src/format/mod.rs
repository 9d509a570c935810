//! Message formatting
//!
//! Turns a [`Failure`] into the sentence reported to callers. The rules are
//! part of the public contract and are pinned by tests:
//!
//! - text payloads read `{path} must be {article} {phrase}.`
//! - an empty path is reported as `value`
//! - positional paths are prefixed with `Item at position `
//! - custom payloads replace the whole sentence
//!
//! # Examples
//!
//! ```
//! use atlas_validator::format::{FormatOptions, process_message};
//! use atlas_validator::foundation::Failure;
//!
//! let options = FormatOptions::default();
//! let failure = Failure::text("string").prefixed("name");
//! assert_eq!(process_message(&failure, &options), "name must be a string.");
//!
//! let failure = Failure::text("number").prefixed(1_usize);
//! assert_eq!(
//!     process_message(&failure, &options),
//!     "Item at position 1 must be a number."
//! );
//! ```

mod options;

pub use options::FormatOptions;

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Failure, PathSegment, Payload, join_path};

/// Subject used when a failure applies to the validated value itself.
pub const DEFAULT_SUBJECT: &str = "value";

/// Prefix for failures located by array position.
const POSITION_PREFIX: &str = "Item at position ";

/// Renders a failure into its final message.
///
/// The failure's path replaces the path in `options` (an empty path
/// becomes `value`). Custom payloads receive the resulting options; text
/// payloads are rendered by [`format_error_message`].
#[must_use]
pub fn process_message(failure: &Failure, options: &FormatOptions) -> String {
    let options = if failure.path().is_empty() {
        options.with_path([PathSegment::from(DEFAULT_SUBJECT)])
    } else {
        options.with_path(failure.path().iter().cloned())
    };

    match failure.payload() {
        Payload::Custom(render) => render.render(&options),
        Payload::Text(phrase) => {
            format_error_message(&options, &format!("must be {}.", add_article(phrase)))
        }
    }
}

/// Joins the options path and `tail` into a sentence.
///
/// Positional paths (see [`is_array_culprit`]) are prefixed with
/// `Item at position `.
#[must_use]
pub fn format_error_message(options: &FormatOptions, tail: &str) -> String {
    let prefix = if is_array_culprit(options.path()) {
        POSITION_PREFIX
    } else {
        ""
    };
    format!("{prefix}{} {tail}", join_path(options.path()))
}

/// Returns `true` when the path locates an array item.
///
/// Only the last and the first segment are inspected: `a.b.0` and `0.a`
/// are positional, `a.0.b` is not.
#[must_use]
pub fn is_array_culprit(path: &[PathSegment]) -> bool {
    path.last().is_some_and(PathSegment::is_index)
        || path.first().is_some_and(PathSegment::is_index)
}

/// Prefixes a noun phrase with its indefinite article.
///
/// Phrases already starting with `a ` / `an ` are kept, as are phrases
/// that do not start with a letter (quoted literals, brackets, digits).
#[must_use]
pub fn add_article(phrase: &str) -> Cow<'_, str> {
    if phrase.starts_with("a ") || phrase.starts_with("an ") {
        return Cow::Borrowed(phrase);
    }
    match phrase.chars().next() {
        Some(c) if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') => {
            Cow::Owned(format!("an {phrase}"))
        }
        Some(c) if c.is_ascii_alphabetic() => Cow::Owned(format!("a {phrase}")),
        _ => Cow::Borrowed(phrase),
    }
}

/// Joins phrases as `A, B or C`.
///
/// # Examples
///
/// ```
/// use atlas_validator::format::or_list;
///
/// assert_eq!(or_list(&["string"]), "string");
/// assert_eq!(or_list(&["string", "number"]), "string or number");
/// assert_eq!(or_list(&["a", "b", "c"]), "a, b or c");
/// ```
#[must_use]
pub fn or_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} or {}", head.join(", "), last.as_ref())
        }
    }
}

// ============================================================================
// LITERALS
// ============================================================================

/// Largest magnitude printed in positional notation; beyond it numbers use
/// exponent notation.
const POSITIONAL_LIMIT: i32 = 21;

/// Renders a number the way it reads in a JavaScript message.
///
/// Integral values have no fractional part, `-0` reads `0`, and very large
/// or very small magnitudes use exponent notation (`1e+21`, `1e-7`).
///
/// # Examples
///
/// ```
/// use atlas_validator::format::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }

    // shortest round-trip digits, e.g. "-1.25e3"
    let scientific = format!("{n:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // position of the decimal point relative to the start of `digits`
    let point = exponent + 1;

    let body = if len <= point && point <= POSITIONAL_LIMIT {
        format!("{digits}{}", "0".repeat((point - len).unsigned_abs() as usize))
    } else if 0 < point && point <= POSITIONAL_LIMIT {
        let (int, frac) = digits.split_at(point.unsigned_abs() as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exponent_sign}{}", exponent.unsigned_abs())
        } else {
            format!("{first}.{rest}e{exponent_sign}{}", exponent.unsigned_abs())
        }
    };
    format!("{sign}{body}")
}

/// Renders a JSON literal as compact JSON text, with numbers written by
/// [`format_number`].
///
/// # Examples
///
/// ```
/// use atlas_validator::format::format_literal;
/// use serde_json::json;
///
/// assert_eq!(format_literal(&json!("png")), "\"png\"");
/// assert_eq!(format_literal(&json!([1.0, 2.5])), "[1,2.5]");
/// assert_eq!(format_literal(&json!({ "zoom": 8.0 })), "{\"zoom\":8}");
/// ```
#[must_use]
pub fn format_literal(value: &Value) -> String {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format_number(f),
            _ => n.to_string(),
        },
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(format_literal).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{}:{}", Value::from(key.as_str()), format_literal(value)))
                .collect();
            format!("{{{}}}", entries.join(","))
        }
        Value::Null | Value::Bool(_) | Value::String(_) => value.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn path(segments: &[PathSegment]) -> FormatOptions {
        FormatOptions::default().with_path(segments.iter().cloned())
    }

    fn key(k: &str) -> PathSegment {
        PathSegment::from(k)
    }

    #[rstest]
    #[case("string", "a string")]
    #[case("object", "an object")]
    #[case("array of [longitude, latitude]", "an array of [longitude, latitude]")]
    #[case("Upper", "an Upper")]
    #[case("number between 1 & 5 (inclusive)", "a number between 1 & 5 (inclusive)")]
    #[case("a string", "a string")]
    #[case("an image", "an image")]
    #[case("\"aa\" or \"bb\"", "\"aa\" or \"bb\"")]
    #[case("3 or 4", "3 or 4")]
    #[case("[1,2]", "[1,2]")]
    #[case("", "")]
    fn test_add_article(#[case] phrase: &str, #[case] expected: &str) {
        assert_eq!(add_article(phrase), expected);
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&["a"], "a")]
    #[case(&["a", "b"], "a or b")]
    #[case(&["a", "b", "c"], "a, b or c")]
    #[case(&["a", "b", "c", "d"], "a, b, c or d")]
    fn test_or_list(#[case] items: &[&str], #[case] expected: &str) {
        assert_eq!(or_list(items), expected);
    }

    #[rstest]
    #[case(8.0, "8")]
    #[case(-3.0, "-3")]
    #[case(2.5, "2.5")]
    #[case(-0.5, "-0.5")]
    #[case(0.0, "0")]
    #[case(-0.0, "0")]
    #[case(0.1, "0.1")]
    #[case(0.000_001, "0.000001")]
    #[case(1e-7, "1e-7")]
    #[case(1.5e-7, "1.5e-7")]
    #[case(123.456, "123.456")]
    #[case(1e20, "100000000000000000000")]
    #[case(1e21, "1e+21")]
    #[case(-2.5e22, "-2.5e+22")]
    #[case(f64::INFINITY, "Infinity")]
    #[case(f64::NAN, "NaN")]
    fn test_format_number(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(format_number(n), expected);
    }

    #[test]
    fn test_format_literal() {
        use serde_json::json;

        assert_eq!(format_literal(&json!(8.0)), "8");
        assert_eq!(format_literal(&json!(-7)), "-7");
        assert_eq!(format_literal(&json!(u64::MAX)), "18446744073709551615");
        assert_eq!(format_literal(&json!("a\"b")), "\"a\\\"b\"");
        assert_eq!(format_literal(&json!(null)), "null");
        assert_eq!(format_literal(&json!([1.0, [2.0, true]])), "[1,[2,true]]");
        assert_eq!(
            format_literal(&json!({ "a": 1.0, "b": "x" })),
            "{\"a\":1,\"b\":\"x\"}"
        );
    }

    #[test]
    fn test_array_culprit_two_ended_check() {
        assert!(!is_array_culprit(&[]));
        assert!(!is_array_culprit(&[key("a")]));
        assert!(is_array_culprit(&[PathSegment::Index(0)]));
        assert!(is_array_culprit(&[key("a"), key("b"), PathSegment::Index(0)]));
        assert!(is_array_culprit(&[PathSegment::Index(0), key("a")]));
        // an inner index alone does not make the path positional
        assert!(!is_array_culprit(&[key("a"), PathSegment::Index(0), key("b")]));
    }

    #[test]
    fn test_format_error_message() {
        assert_eq!(
            format_error_message(&path(&[key("a"), key("b")]), "is required."),
            "a.b is required."
        );
        assert_eq!(
            format_error_message(&path(&[key("a"), PathSegment::Index(3)]), "is required."),
            "Item at position a.3 is required."
        );
    }

    #[test]
    fn test_process_message_text_payload() {
        let options = FormatOptions::default();
        assert_eq!(
            process_message(&Failure::text("string"), &options),
            "value must be a string."
        );
        assert_eq!(
            process_message(&Failure::text("object").prefixed("style"), &options),
            "style must be an object."
        );
    }

    #[test]
    fn test_process_message_mixed_paths() {
        let options = FormatOptions::default();
        let inner_index = Failure::text("string")
            .prefixed("name")
            .prefixed(2_usize)
            .prefixed("stops");
        assert_eq!(
            process_message(&inner_index, &options),
            "stops.2.name must be a string."
        );

        let leading_index = Failure::text("string").prefixed("name").prefixed(2_usize);
        assert_eq!(
            process_message(&leading_index, &options),
            "Item at position 2.name must be a string."
        );

        let trailing_index = Failure::text("number").prefixed(1_usize).prefixed("stops");
        assert_eq!(
            process_message(&trailing_index, &options),
            "Item at position stops.1 must be a number."
        );
    }

    #[test]
    fn test_process_message_custom_payload_sees_resolved_path() {
        let options = FormatOptions::default().with_extension("tag", "x");
        let failure = Failure::custom(|options: &FormatOptions| {
            format!(
                "{} [{}]",
                join_path(options.path()),
                options.extension("tag").and_then(|v| v.as_str()).unwrap_or("")
            )
        });
        assert_eq!(process_message(&failure, &options), "value [x]");
        assert_eq!(
            process_message(&failure.clone().prefixed("a"), &options),
            "a [x]"
        );
    }

    #[test]
    fn test_process_message_replaces_outer_path() {
        let outer = FormatOptions::default().with_path([key("outer")]);
        let failure = Failure::text("string").prefixed("inner");
        assert_eq!(
            process_message(&failure, &outer),
            "inner must be a string."
        );
    }
}
