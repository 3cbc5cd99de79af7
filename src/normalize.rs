//! Normalization of raw schema-engine errors into diagnostics.
//!
//! Schema engines report disjunction failures redundantly: a summary line
//! followed by one conflict line per rejected alternative. This module
//! provides [`Normalizer`], which collapses each such group into a single
//! position-anchored [`Diagnostic`] and passes every other error through
//! one-to-one.

use regex::Regex;

use crate::error::{Diagnostic, RawError};

/// Recognizes the engine's message wording.
///
/// The grouping scan in [`Normalizer`] depends on the exact phrasing the
/// engine uses for disjunction summaries and conflicting values. That
/// dependency is isolated here: swapping in a classifier built from
/// different patterns adapts the normalizer to another engine wording
/// without touching the scan itself.
#[derive(Debug, Clone)]
pub struct MessageClassifier {
    disjunction: Regex,
    conflict: Regex,
}

/// A parsed disjunction-summary message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DisjunctionSummary {
    /// The field whose disjunction failed.
    field: String,
    /// The group size the summary declares, itself included.
    count: usize,
}

/// A parsed conflicting-values message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Conflict {
    /// The value found in the document.
    found: String,
    /// The schema alternative the value was checked against.
    alternative: String,
}

impl MessageClassifier {
    /// Creates a classifier for the default engine wording.
    pub fn new() -> Self {
        Self::with_patterns(
            r"^(.*): (\d+) errors in empty disjunction",
            r"^(.*): conflicting values (.*) and (.*)",
        )
        .expect("default patterns compile")
    }

    /// Creates a classifier from custom wording patterns.
    ///
    /// `disjunction` must expose two capture groups, the field and the group
    /// count; `conflict` must expose three, the field, the value found in
    /// the document, and the rejected alternative.
    pub fn with_patterns(disjunction: &str, conflict: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            disjunction: Regex::new(disjunction)?,
            conflict: Regex::new(conflict)?,
        })
    }

    /// Parses a message as a disjunction summary, if it is one.
    ///
    /// A summary whose count does not fit `usize` is not recognized; the
    /// message then falls through to generic handling instead of being
    /// presumed to open a group.
    fn disjunction_summary(&self, message: &str) -> Option<DisjunctionSummary> {
        let caps = self.disjunction.captures(message)?;
        let field = caps.get(1)?.as_str().to_string();
        let count = caps.get(2)?.as_str().parse().ok()?;
        Some(DisjunctionSummary { field, count })
    }

    /// Parses a message as a conflicting-values report, if it is one.
    fn conflict(&self, message: &str) -> Option<Conflict> {
        let caps = self.conflict.captures(message)?;
        Some(Conflict {
            found: caps.get(2)?.as_str().to_string(),
            alternative: caps.get(3)?.as_str().to_string(),
        })
    }
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses a schema engine's raw error sequence into diagnostics.
///
/// Grouped disjunction failures become exactly one diagnostic naming the
/// offending value and the alternatives it was rejected against. All other
/// failures pass through one-to-one with a `file:line:column` prefix. The
/// relative order of independent failures is preserved, and the input is
/// never mutated.
///
/// # Example
///
/// ```rust
/// use debrief::{Normalizer, Position, RawError};
///
/// let errors = vec![
///     RawError::new("foo: 3 errors in empty disjunction"),
///     RawError::new("foo: conflicting values 42 and 0")
///         .at(Position::new("document.yml", 1, 7)),
///     RawError::new("foo: conflicting values 42 and 1")
///         .at(Position::new("document.yml", 1, 7)),
/// ];
///
/// let diagnostics = Normalizer::new().normalize("document.yml", &errors).unwrap();
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(
///     diagnostics[0].to_string(),
///     "document.yml:1:7: foo: found 42, expected one of: 0, 1"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    classifier: MessageClassifier,
}

impl Normalizer {
    /// Creates a normalizer for the default engine wording.
    pub fn new() -> Self {
        Self {
            classifier: MessageClassifier::new(),
        }
    }

    /// Creates a normalizer using a custom message classifier.
    pub fn with_classifier(classifier: MessageClassifier) -> Self {
        Self { classifier }
    }

    /// Normalizes one validation run's error sequence.
    ///
    /// `filename` is the source label diagnostics are reported under.
    ///
    /// # Errors
    ///
    /// Returns a [`NormalizeError`] when the sequence violates the expected
    /// group shape. That is a defect in the engine's output, distinct from
    /// the user-facing diagnostics this method emits; a partial or guessed
    /// result would be misleading, so nothing is returned in that case.
    pub fn normalize(
        &self,
        filename: &str,
        errors: &[RawError],
    ) -> Result<Vec<Diagnostic>, NormalizeError> {
        let result = self.scan(filename, errors);
        if let Err(ref err) = result {
            tracing::warn!("malformed engine output: {}", err);
        }
        result
    }

    fn scan(
        &self,
        filename: &str,
        errors: &[RawError],
    ) -> Result<Vec<Diagnostic>, NormalizeError> {
        let mut diagnostics = Vec::with_capacity(errors.len());
        let mut i = 0;
        while i < errors.len() {
            let error = &errors[i];
            if let Some(summary) = self.classifier.disjunction_summary(&error.message) {
                diagnostics.push(self.collapse_group(filename, errors, i, &summary)?);
                // Skip the summary and its members in one step.
                i += summary.count;
                continue;
            }

            let position =
                error
                    .primary_position()
                    .ok_or_else(|| NormalizeError::MissingPosition {
                        message: error.message.clone(),
                    })?;
            diagnostics.push(Diagnostic::new(
                position.in_file(filename),
                error.message.clone(),
            ));
            i += 1;
        }
        Ok(diagnostics)
    }

    /// Collapses the group summarized at `index` into one diagnostic.
    ///
    /// The group spans the summary plus the `count - 1` conflict members
    /// that follow it. The summary itself carries no usable position; the
    /// diagnostic is anchored at the first member, which points at the
    /// offending value.
    fn collapse_group(
        &self,
        filename: &str,
        errors: &[RawError],
        index: usize,
        summary: &DisjunctionSummary,
    ) -> Result<Diagnostic, NormalizeError> {
        if summary.count < 2 {
            return Err(NormalizeError::EmptyGroup {
                field: summary.field.clone(),
                count: summary.count,
            });
        }

        let end = index + summary.count;
        if end > errors.len() {
            return Err(NormalizeError::TruncatedGroup {
                field: summary.field.clone(),
                declared: summary.count - 1,
                available: errors.len() - index - 1,
            });
        }

        let members = &errors[index + 1..end];
        let position = members[0]
            .primary_position()
            .ok_or_else(|| NormalizeError::MissingPosition {
                message: members[0].message.clone(),
            })?;

        let mut found = None;
        let mut expected = Vec::with_capacity(members.len());
        for member in members {
            let conflict = self.classifier.conflict(&member.message).ok_or_else(|| {
                NormalizeError::UnexpectedMember {
                    field: summary.field.clone(),
                    message: member.message.clone(),
                }
            })?;
            if found.is_none() {
                found = Some(conflict.found);
            }
            expected.push(conflict.alternative);
        }

        let message = format!(
            "{}: found {}, expected one of: {}",
            summary.field,
            found.unwrap_or_default(),
            expected.join(", ")
        );
        Ok(Diagnostic::new(position.in_file(filename), message))
    }
}

/// Defect in the engine's error sequence.
///
/// These are contract violations between the normalizer and the schema
/// engine, not user-data failures: the engine's wording is a trusted
/// interface, and output that breaks the declared group shape means the
/// whole pass cannot be trusted either.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A disjunction summary declared more members than errors remain.
    #[error("disjunction summary for {field} declares {declared} members but only {available} errors follow")]
    TruncatedGroup {
        /// The field the summary names.
        field: String,
        /// Members the summary declared.
        declared: usize,
        /// Errors actually remaining after the summary.
        available: usize,
    },

    /// A disjunction summary declared a group with no members.
    #[error("disjunction summary for {field} declares a group of {count}, leaving no member to anchor to")]
    EmptyGroup {
        /// The field the summary names.
        field: String,
        /// The group size the summary declared.
        count: usize,
    },

    /// A group member did not carry the conflicting-values wording.
    #[error("expected a conflicting-values message in the group for {field}, got: {message}")]
    UnexpectedMember {
        /// The field the group's summary names.
        field: String,
        /// The offending member's message.
        message: String,
    },

    /// An error that must be anchored carried no source position.
    #[error("no source position attached to: {message}")]
    MissingPosition {
        /// The unanchorable error's message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_recognizes_summary() {
        let classifier = MessageClassifier::new();
        let summary = classifier
            .disjunction_summary("foo: 3 errors in empty disjunction")
            .unwrap();

        assert_eq!(summary.field, "foo");
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_classifier_recognizes_nested_field_summary() {
        let classifier = MessageClassifier::new();
        let summary = classifier
            .disjunction_summary("spec.replicas: 2 errors in empty disjunction")
            .unwrap();

        assert_eq!(summary.field, "spec.replicas");
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn test_classifier_rejects_other_messages() {
        let classifier = MessageClassifier::new();

        assert!(classifier
            .disjunction_summary("bar: field not allowed")
            .is_none());
        assert!(classifier
            .conflict("foo: 3 errors in empty disjunction")
            .is_none());
    }

    #[test]
    fn test_classifier_rejects_overflowing_count() {
        let classifier = MessageClassifier::new();

        // A count that cannot fit usize is not a well-formed summary.
        let message = "foo: 99999999999999999999999999 errors in empty disjunction";
        assert!(classifier.disjunction_summary(message).is_none());
    }

    #[test]
    fn test_classifier_parses_conflict_operands() {
        let classifier = MessageClassifier::new();
        let conflict = classifier
            .conflict("foo: conflicting values 42 and 0")
            .unwrap();

        assert_eq!(conflict.found, "42");
        assert_eq!(conflict.alternative, "0");
    }

    #[test]
    fn test_classifier_conflict_with_trailing_detail() {
        let classifier = MessageClassifier::new();
        let conflict = classifier
            .conflict(r#"bar: conflicting values "dev" and "prod""#)
            .unwrap();

        assert_eq!(conflict.found, r#""dev""#);
        assert_eq!(conflict.alternative, r#""prod""#);
    }

    #[test]
    fn test_custom_patterns_swap_the_wording() {
        let classifier = MessageClassifier::with_patterns(
            r"^(.*): no alternative matched \((\d+) candidates\)",
            r"^(.*): (.*) rejected against (.*)",
        )
        .unwrap();

        let summary = classifier
            .disjunction_summary("foo: no alternative matched (3 candidates)")
            .unwrap();
        assert_eq!(summary.count, 3);

        let conflict = classifier.conflict("foo: 42 rejected against 0").unwrap();
        assert_eq!(conflict.found, "42");
        assert_eq!(conflict.alternative, "0");
    }

    #[test]
    fn test_invalid_custom_pattern_is_reported() {
        assert!(MessageClassifier::with_patterns(r"([unclosed", r"x").is_err());
    }
}
