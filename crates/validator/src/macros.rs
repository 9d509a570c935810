//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`primitive!`] — Define a primitive validator (struct + `Validate` impl + factory fn)
//! - [`shape!`] — Object schema from `"key" => validator` pairs
//! - [`one_of_type!`] — Union of validators, variadic call style
//! - [`one_of!`] — Union of literal values, variadic call style
//!
//! # Examples
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let style = shape! {
//!     "id" => required(string()),
//!     "padding" => one_of_type![number(), array_of(number())],
//!     "format" => one_of!["png", "jpg"],
//! };
//!
//! let assertion = assert(style, AssertOptions::default());
//! assert!(assertion.check(&json!({ "id": "streets", "format": "png" })).is_ok());
//! ```

// ============================================================================
// PRIMITIVE MACRO
// ============================================================================

/// Creates a primitive validator: struct definition, `Validate`
/// implementation and a factory returning a [`Validator`](crate::foundation::Validator).
///
/// A failing rule reports the `expect` phrase as a text payload with an
/// empty path.
///
/// # Variants
///
/// **Unit validator** (fixed phrase, exposed as `EXPECTED`):
/// ```rust,ignore
/// primitive! {
///     pub StringType;
///     rule(input) { input.is_string() }
///     expect "string";
///     fn string();
/// }
/// ```
///
/// **Struct with fields** (phrase computed from the fields):
/// ```rust,ignore
/// primitive! {
///     pub Range { min: f64, max: f64 };
///     rule(self, input) { input.as_f64().is_some_and(|n| n >= self.min && n <= self.max) }
///     expect(self) { format!("number between {} & {} (inclusive)", self.min, self.max) }
///     fn range(min: f64, max: f64);
/// }
/// ```
#[macro_export]
macro_rules! primitive {
    // ── Variant 1a: Unit validator + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        expect $phrase:literal;
        fn $factory:ident();
    ) => {
        $crate::primitive! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            expect $phrase;
        }

        #[must_use]
        $vis fn $factory() -> $crate::foundation::Validator {
            $crate::foundation::Validator::plain($name)
        }
    };

    // ── Variant 1b: Unit validator, no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        expect $phrase:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// Noun phrase reported when the check fails.
            pub const EXPECTED: &'static str = $phrase;
        }

        impl $crate::foundation::Validate for $name {
            fn check(
                &self,
                $inp: &$crate::Value,
            ) -> ::std::result::Result<(), $crate::foundation::Failure> {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::Failure::text(Self::EXPECTED))
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        expect($self2:ident) $phrase:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::primitive! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            expect($self2) $phrase
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $crate::foundation::Validator {
            $crate::foundation::Validator::plain($name::new($($farg),*))
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        expect($self2:ident) $phrase:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }

            /// Noun phrase reported when the check fails.
            pub fn expected(&$self2) -> ::std::string::String $phrase
        }

        impl $crate::foundation::Validate for $name {
            fn check(
                &$self_,
                $inp: &$crate::Value,
            ) -> ::std::result::Result<(), $crate::foundation::Failure> {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::Failure::text($self_.expected()))
                }
            }
        }
    };
}

// ============================================================================
// SCHEMA MACROS
// ============================================================================

/// Builds a [`shape`](crate::combinators::shape) validator from
/// `"key" => validator` pairs, keeping the declared key order.
///
/// # Examples
///
/// ```
/// use atlas_validator::prelude::*;
/// use serde_json::json;
///
/// let marker = shape! {
///     "coordinates" => required(coordinates()),
///     "label" => string(),
/// };
/// assert!(validate(&marker, Some(&json!({ "coordinates": [10, 20] }))).is_ok());
/// ```
#[macro_export]
macro_rules! shape {
    ($($key:expr => $validator:expr),* $(,)?) => {
        $crate::combinators::shape([$(($key, $validator)),*])
    };
}

/// Builds a [`one_of_type`](crate::combinators::one_of_type) validator
/// from a variadic list of validators.
///
/// # Examples
///
/// ```
/// use atlas_validator::prelude::*;
/// use serde_json::json;
///
/// let size = one_of_type![number(), string()];
/// assert!(validate(&size, Some(&json!("auto"))).is_ok());
/// assert!(validate(&size, Some(&json!(true))).is_err());
/// ```
#[macro_export]
macro_rules! one_of_type {
    ($($validator:expr),* $(,)?) => {
        $crate::combinators::one_of_type([$($validator),*])
    };
}

/// Builds a [`one_of`](crate::combinators::one_of) validator from a
/// variadic list of values convertible into JSON.
///
/// # Examples
///
/// ```
/// use atlas_validator::prelude::*;
/// use serde_json::json;
///
/// let profile = one_of!["driving", "walking", "cycling"];
/// assert!(validate(&profile, Some(&json!("walking"))).is_ok());
/// assert!(validate(&profile, Some(&json!("flying"))).is_err());
/// ```
#[macro_export]
macro_rules! one_of {
    ($($value:expr),* $(,)?) => {
        $crate::combinators::one_of([$($crate::Value::from($value)),*])
    };
}

// ============================================================================
// TESTS
// ============================================================================
