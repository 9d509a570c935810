//! Options threaded through message formatting.

use serde_json::{Map, Value};

use crate::assert::AssertOptions;
use crate::foundation::{Path, PathSegment};

/// Context handed to the formatter and to every custom render.
///
/// Immutable: [`FormatOptions::with_path`] returns a new value, so a
/// custom render can format nested failures without disturbing its caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    path: Path,
    api_name: Option<String>,
    extensions: Map<String, Value>,
}

impl FormatOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the given path.
    #[must_use]
    pub fn with_path<I>(&self, path: I) -> Self
    where
        I: IntoIterator<Item = PathSegment>,
    {
        Self {
            path: path.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Sets the API name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_api_name(mut self, api_name: impl Into<String>) -> Self {
        self.api_name = Some(api_name.into());
        self
    }

    /// Adds a caller-defined extension value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Path of the value being reported.
    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Name of the API call being validated, if any.
    #[must_use]
    pub fn api_name(&self) -> Option<&str> {
        self.api_name.as_deref()
    }

    /// Looks up a caller-defined extension value.
    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// All caller-defined extension values.
    #[must_use]
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }
}

impl From<&AssertOptions> for FormatOptions {
    fn from(options: &AssertOptions) -> Self {
        Self {
            path: Path::new(),
            api_name: options.api_name.clone(),
            extensions: options.extensions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_path_keeps_other_fields() {
        let options = FormatOptions::new()
            .with_api_name("Styles.getStyle")
            .with_extension("units", "metric");
        let nested = options.with_path([PathSegment::from("layers"), PathSegment::Index(2)]);

        assert!(options.path().is_empty());
        assert_eq!(nested.path().len(), 2);
        assert_eq!(nested.api_name(), Some("Styles.getStyle"));
        assert_eq!(nested.extension("units"), Some(&json!("metric")));
    }

    #[test]
    fn test_from_assert_options() {
        let assert_options = AssertOptions::default()
            .with_api_name("Geocoding.forwardGeocode")
            .with_extension("strict", true);
        let options = FormatOptions::from(&assert_options);

        assert_eq!(options.api_name(), Some("Geocoding.forwardGeocode"));
        assert_eq!(options.extension("strict"), Some(&json!(true)));
        assert!(options.path().is_empty());
        assert_eq!(options.extensions().len(), 1);
    }
}
