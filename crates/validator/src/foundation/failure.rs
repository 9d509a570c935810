//! Failure model for validation results
//!
//! A [`Failure`] is a path of object keys / array indices leading to the
//! offending value, followed by a terminal [`Payload`]. The payload is
//! either a noun phrase describing what was expected (`"string"`,
//! `"array of [longitude, latitude]"`) or a [`CustomRender`] that produces
//! the whole sentence itself.
//!
//! Combinators build failures bottom-up: a primitive reports a payload
//! with an empty path, and every enclosing `shape` / `array_of` prepends
//! its own segment on the way out.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::format::FormatOptions;

// ============================================================================
// PATH
// ============================================================================

/// One step of a failure path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key.
    Key(String),
    /// Zero-based array position.
    Index(usize),
}

impl PathSegment {
    /// Returns `true` for array positions.
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Ordered path segments, stored inline for the common shallow case.
pub type Path = SmallVec<[PathSegment; 4]>;

/// Joins a path with `.`, e.g. `["stops", 2, "name"]` → `stops.2.name`.
#[must_use]
pub fn join_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

// ============================================================================
// PAYLOAD
// ============================================================================

/// A failure payload that renders its own message.
///
/// Used where the sentence depends on where the failure ends up
/// (required-field phrasing) or aggregates several failures (multi-key
/// `shape` reports). The closure receives the options of the formatting
/// call, including the resolved path.
#[derive(Clone)]
pub struct CustomRender(Arc<dyn Fn(&FormatOptions) -> String + Send + Sync>);

impl CustomRender {
    /// Wraps a rendering closure.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&FormatOptions) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    /// Produces the final message for the given options.
    #[must_use]
    pub fn render(&self, options: &FormatOptions) -> String {
        (self.0)(options)
    }
}

impl fmt::Debug for CustomRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRender(<function>)")
    }
}

/// Terminal element of a [`Failure`].
#[derive(Debug, Clone)]
pub enum Payload {
    /// Noun phrase naming the expected type or shape.
    Text(Cow<'static, str>),
    /// Full override of the rendered message.
    Custom(CustomRender),
}

// ============================================================================
// FAILURE
// ============================================================================

/// A validation failure: where it happened and what went wrong.
///
/// An empty path means the failure applies to the validated value itself.
///
/// # Examples
///
/// ```
/// use atlas_validator::foundation::{Failure, PathSegment};
///
/// let failure = Failure::text("string").prefixed("name").prefixed(0_usize);
/// assert_eq!(
///     failure.path(),
///     &[PathSegment::Index(0), PathSegment::from("name")]
/// );
/// assert_eq!(failure.as_text(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Failure {
    path: Path,
    payload: Payload,
}

impl Failure {
    /// Creates a path-less failure carrying a noun phrase.
    pub fn text(phrase: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: Path::new(),
            payload: Payload::Text(phrase.into()),
        }
    }

    /// Creates a path-less failure that renders its own message.
    pub fn custom<F>(render: F) -> Self
    where
        F: Fn(&FormatOptions) -> String + Send + Sync + 'static,
    {
        Self {
            path: Path::new(),
            payload: Payload::Custom(CustomRender::new(render)),
        }
    }

    /// Prepends a segment to the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn prefixed(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Path leading to the offending value.
    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Terminal payload.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the phrase when this failure is a bare, path-less text payload.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(phrase) if self.path.is_empty() => Some(phrase.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` for bare, path-less text payloads.
    #[must_use]
    pub fn is_flat_text(&self) -> bool {
        self.as_text().is_some()
    }
}
