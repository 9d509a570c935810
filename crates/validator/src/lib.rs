//! # atlas-validator
//!
//! Composable, path-aware validators for decoded request parameters.
//!
//! ## Quick Start
//!
//! ```
//! use atlas_validator::prelude::*;
//! use serde_json::json;
//!
//! let geocode = assert(
//!     shape! {
//!         "query" => required(string()),
//!         "proximity" => coordinates(),
//!         "types" => array_of(one_of!["country", "region", "place"]),
//!     },
//!     AssertOptions::default().with_api_name("Geocoding.forwardGeocode"),
//! );
//!
//! assert!(geocode.check(&json!({ "query": "Paris", "types": ["place"] })).is_ok());
//!
//! let err = geocode.check(&json!({ "query": "Paris", "types": ["city"] })).unwrap_err();
//! assert_eq!(
//!     err.message(),
//!     "Geocoding.forwardGeocode: Item at position types.0 must be \"country\", \"region\" or \"place\"."
//! );
//! ```
//!
//! ## Optional by default
//!
//! `null` and missing values pass every validator unless it is wrapped in
//! [`required`](combinators::required).
//!
//! ## Creating Validators
//!
//! Use the [`primitive!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Types**: [`string`](validators::string), [`number`](validators::number),
//!   [`boolean`](validators::boolean), [`plain_array`](validators::plain_array),
//!   [`plain_object`](validators::plain_object), [`date`](validators::date)
//! - **Values**: [`equal`](validators::equal), [`range`](validators::range),
//!   [`coordinates`](validators::coordinates)
//! - **Combinators**: [`required`](combinators::required),
//!   [`array_of`](combinators::array_of), [`shape`](combinators::shape),
//!   [`one_of_type`](combinators::one_of_type), [`one_of`](combinators::one_of)

pub mod assert;
pub mod combinators;
pub mod format;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use serde_json::Value;
