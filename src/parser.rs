//! Parsing seam between file contents and document values.
//!
//! This module provides the [`DocumentParser`] trait the tree builder calls
//! once per file, plus [`YamlParser`] and [`JsonParser`] implementations over
//! the standard serde parsers.

use serde_json::Value;

/// Parses raw file contents into a generic document value.
///
/// `DocumentParser` is the seam to the external parsing collaborator. The
/// tree builder invokes it once per file; implementations must be stateless
/// across calls. A caller needing timeouts or cancellation imposes them in
/// its own implementation of this trait.
pub trait DocumentParser {
    /// Parses a byte buffer into a document value.
    fn parse(&self, contents: &[u8]) -> Result<Value, ParseError>;
}

/// Error from a document parser.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The contents are not valid YAML.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    /// The contents are not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Parses file contents as YAML.
///
/// # Example
///
/// ```rust
/// use debrief::{DocumentParser, YamlParser};
/// use serde_json::json;
///
/// let value = YamlParser.parse(b"x: 1").unwrap();
/// assert_eq!(value, json!({"x": 1}));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl DocumentParser for YamlParser {
    fn parse(&self, contents: &[u8]) -> Result<Value, ParseError> {
        Ok(serde_yaml::from_slice(contents)?)
    }
}

/// Parses file contents as JSON.
///
/// # Example
///
/// ```rust
/// use debrief::{DocumentParser, JsonParser};
/// use serde_json::json;
///
/// let value = JsonParser.parse(br#"{"x": 1}"#).unwrap();
/// assert_eq!(value, json!({"x": 1}));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl DocumentParser for JsonParser {
    fn parse(&self, contents: &[u8]) -> Result<Value, ParseError> {
        Ok(serde_json::from_slice(contents)?)
    }
}
