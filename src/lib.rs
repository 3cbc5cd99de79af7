//! # Debrief
//!
//! Turns a schema engine's raw validation output into precise,
//! position-anchored diagnostics, and assembles on-disk file trees into
//! structured documents ready for validation.
//!
//! ## Overview
//!
//! Validating a package manifest and its data files against a versioned
//! schema leaves two problems outside the engine itself: the engine's error
//! output is redundant and hard to read, and the files on disk must first
//! become one structured value the engine can check. Debrief covers exactly
//! these two seams with independent, composable pieces: a [`TreeBuilder`]
//! feeding documents in, and a [`Normalizer`] cleaning diagnostics up on the
//! way out. The engine, the parsers, and the filesystem stay behind narrow
//! collaborator traits.
//!
//! ## Core Types
//!
//! - [`Normalizer`]: collapses raw engine errors into [`Diagnostic`] lines
//! - [`RawError`] / [`Diagnostic`]: engine-reported issues and their
//!   human-oriented form, anchored by [`Position`]
//! - [`TreeBuilder`]: assembles a [`FileStore`] into a [`DocumentNode`]
//! - [`DocumentNode`]: ordered tree value mirroring a directory hierarchy
//!
//! ## Example
//!
//! ```rust
//! use debrief::{MemoryStore, Normalizer, Position, RawError, TreeBuilder, YamlParser};
//!
//! // Assemble a file tree into one document value.
//! let store = MemoryStore::new()
//!     .file("manifest.yml", "name: demo")
//!     .dir("data", MemoryStore::new().file("users.yml", "count: 2"));
//! let document = TreeBuilder::new(YamlParser).build(&store).unwrap();
//! assert!(document.get("manifest.yml").is_some());
//!
//! // Normalize raw engine output into diagnostics.
//! let errors = vec![
//!     RawError::new("name: field not allowed").at(Position::new("manifest.yml", 1, 2)),
//! ];
//! let diagnostics = Normalizer::new().normalize("manifest.yml", &errors).unwrap();
//! assert_eq!(
//!     diagnostics[0].to_string(),
//!     "manifest.yml:1:2: name: field not allowed"
//! );
//! ```

pub mod build;
pub mod document;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod position;
pub mod store;

pub use build::{BuildError, TreeBuilder};
pub use document::DocumentNode;
pub use error::{Diagnostic, RawError};
pub use normalize::{MessageClassifier, NormalizeError, Normalizer};
pub use parser::{DocumentParser, JsonParser, ParseError, YamlParser};
pub use position::Position;
pub use store::{DirEntry, DirStore, FileStore, MemoryStore};
