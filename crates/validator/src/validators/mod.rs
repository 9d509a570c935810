//! Built-in primitive validators
//!
//! Each validator is a pure check over a present JSON value that either
//! passes or reports a short noun phrase naming what was expected.
//!
//! # Categories
//!
//! - **Types**: [`string`], [`number`], [`boolean`], [`plain_array`], [`plain_object`]
//! - **Time**: [`date`]
//! - **Literals**: [`equal`]
//! - **Numeric**: [`range`]
//! - **Geographic**: [`coordinates`]
//!
//! # Examples
//!
//! ```
//! use atlas_validator::validators::{number, range};
//! use atlas_validator::foundation::validate;
//! use serde_json::json;
//!
//! assert!(validate(&number(), Some(&json!(3))).is_ok());
//! assert!(validate(&range(0, 22), Some(&json!(30))).is_err());
//! ```

pub mod coordinates;
pub mod date;
pub mod equal;
pub mod range;
pub mod types;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use coordinates::{Coordinates, coordinates};
pub use date::{DateType, date};
pub use equal::{Equal, equal};
pub use range::{Range, range};
pub use types::{
    BooleanType, NumberType, PlainArray, PlainObject, StringType, boolean, number, plain_array,
    plain_object, string,
};
