//! Diagnostic types for validation output.
//!
//! This module provides [`RawError`] for issues as the schema engine reports
//! them and [`Diagnostic`] for the human-oriented lines produced by
//! normalization.

mod diagnostic;

pub use diagnostic::{Diagnostic, RawError};
