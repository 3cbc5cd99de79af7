//! Raw engine errors and normalized diagnostics.
//!
//! This module provides [`RawError`] for single issues as reported by the
//! schema engine and [`Diagnostic`] for the position-anchored lines shown to
//! users.

use std::fmt::{self, Display};

use crate::position::Position;

/// One issue as reported by the schema engine.
///
/// A raw error is an unstructured message plus the ordered list of source
/// positions the engine attached to it. Related errors are grouped only
/// implicitly, through message wording and ordering within one validation
/// run; the normalizer reconstructs that grouping.
///
/// # Example
///
/// ```rust
/// use debrief::{Position, RawError};
///
/// let error = RawError::new("bar: field not allowed")
///     .at(Position::new("document.yml", 1, 2));
///
/// assert_eq!(error.message, "bar: field not allowed");
/// assert_eq!(error.primary_position().unwrap().line, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawError {
    /// The engine's message, verbatim.
    pub message: String,
    /// Positions in the validated document, most relevant first.
    pub positions: Vec<Position>,
}

impl RawError {
    /// Creates a raw error with the given message and no positions.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            positions: Vec::new(),
        }
    }

    /// Appends a source position and returns self for chaining.
    pub fn at(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    /// Returns the first recorded position, if any.
    pub fn primary_position(&self) -> Option<&Position> {
        self.positions.first()
    }
}

impl Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RawError {}

/// A single human-oriented diagnostic line.
///
/// Diagnostics render as `file:line:column: message`, one per logical failure
/// after normalization. They carry the caller-chosen source label in their
/// position, not whatever file name the engine recorded internally.
///
/// # Example
///
/// ```rust
/// use debrief::{Diagnostic, Position};
///
/// let diagnostic = Diagnostic::new(
///     Position::new("document.yml", 2, 7),
///     "bar: field not allowed",
/// );
///
/// assert_eq!(
///     diagnostic.to_string(),
///     "document.yml:2:7: bar: field not allowed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where in the document the failure was located.
    pub position: Position,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic at the given position.
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_error_creation() {
        let error = RawError::new("foo: conflicting values 42 and 0");

        assert_eq!(error.message, "foo: conflicting values 42 and 0");
        assert!(error.positions.is_empty());
        assert!(error.primary_position().is_none());
    }

    #[test]
    fn test_raw_error_positions_ordered() {
        let error = RawError::new("foo: conflicting values 42 and 0")
            .at(Position::new("document.yml", 1, 7))
            .at(Position::new("document.yml", 5, 1));

        assert_eq!(error.positions.len(), 2);
        assert_eq!(
            error.primary_position(),
            Some(&Position::new("document.yml", 1, 7))
        );
    }

    #[test]
    fn test_raw_error_display_is_message() {
        let error = RawError::new("baz: incomplete value int")
            .at(Position::new("document.yml", 3, 1));

        assert_eq!(error.to_string(), "baz: incomplete value int");
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(
            Position::new("document.yml", 1, 7),
            "foo: found 42, expected one of: 0, 1",
        );

        assert_eq!(
            diagnostic.to_string(),
            "document.yml:1:7: foo: found 42, expected one of: 0, 1"
        );
    }

    #[test]
    fn test_diagnostic_equality() {
        let a = Diagnostic::new(Position::new("f.yml", 1, 1), "m");
        let b = Diagnostic::new(Position::new("f.yml", 1, 1), "m");
        let c = Diagnostic::new(Position::new("f.yml", 1, 2), "m");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
