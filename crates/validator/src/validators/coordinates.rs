//! Geographic coordinate validator

use serde_json::Value;

/// Valid longitudes, in degrees.
const LONGITUDE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
/// Valid latitudes, in degrees.
const LATITUDE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

crate::primitive! {
    /// Validates a `[longitude, latitude]` pair.
    ///
    /// The value must be an array of exactly two numbers, the first within
    /// `[-180, 180]` and the second within `[-90, 90]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_validator::validators::Coordinates;
    /// use atlas_validator::foundation::Validate;
    /// use serde_json::json;
    ///
    /// assert!(Coordinates.check(&json!([-73.99, 40.73])).is_ok());
    /// assert!(Coordinates.check(&json!([40.73, -181])).is_err());
    /// ```
    pub Coordinates;
    rule(input) { is_lng_lat(input) }
    expect "array of [longitude, latitude]";
    fn coordinates();
}

fn is_lng_lat(value: &Value) -> bool {
    let within = |v: &Value, bounds: &std::ops::RangeInclusive<f64>| {
        v.as_f64().is_some_and(|n| bounds.contains(&n))
    };
    match value.as_array().map(Vec::as_slice) {
        Some([lng, lat]) => within(lng, &LONGITUDE) && within(lat, &LATITUDE),
        _ => false,
    }
}
