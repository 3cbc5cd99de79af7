//! Assembly of file stores into document values.
//!
//! This module provides [`TreeBuilder`], which recursively turns a
//! [`FileStore`] into one [`DocumentNode`] suitable for schema validation.

use indexmap::IndexMap;

use crate::document::DocumentNode;
use crate::parser::{DocumentParser, ParseError};
use crate::store::FileStore;

/// Assembles a [`FileStore`] into a single [`DocumentNode`].
///
/// The builder walks the store depth-first in lexical entry order,
/// strictly sequentially: directories become branches through a recursive
/// call that fully owns its subtree, files are read, parsed with the
/// builder's [`DocumentParser`], and inserted as leaves under their full
/// name. Field insertion order equals traversal order.
///
/// The operation is atomic with respect to errors: any listing, read, or
/// parse failure at any depth aborts the whole build, and no partial tree is
/// ever returned.
///
/// # Example
///
/// ```rust
/// use debrief::{MemoryStore, TreeBuilder, YamlParser};
/// use serde_json::json;
///
/// let store = MemoryStore::new()
///     .file("a.yml", "x: 1")
///     .dir("b", MemoryStore::new().file("c.yml", "y: 2"));
///
/// let document = TreeBuilder::new(YamlParser).build(&store).unwrap();
///
/// assert_eq!(
///     document.get("a.yml").unwrap().as_leaf(),
///     Some(&json!({"x": 1}))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder<P> {
    parser: P,
}

impl<P: DocumentParser> TreeBuilder<P> {
    /// Creates a builder that parses file contents with the given parser.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Builds the document mirroring the store's directory hierarchy.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] carrying the offending path, relative to the
    /// store root, if any entry cannot be listed, read, or parsed.
    pub fn build<S: FileStore>(&self, store: &S) -> Result<DocumentNode, BuildError> {
        match self.assemble(store) {
            Ok(node) => Ok(node),
            Err(err) => {
                tracing::warn!("document build aborted: {}", err);
                Err(err)
            }
        }
    }

    fn assemble<S: FileStore>(&self, store: &S) -> Result<DocumentNode, BuildError> {
        let entries = store.list().map_err(|source| BuildError::List {
            path: ".".to_string(),
            source,
        })?;

        let mut fields = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let node = if entry.is_dir {
                let sub = store.sub(&entry.name).map_err(|source| BuildError::List {
                    path: entry.name.clone(),
                    source,
                })?;
                // The recursive call fully owns the subtree; its errors are
                // re-anchored under this directory's name.
                self.assemble(&sub)
                    .map_err(|err| err.prefixed(&entry.name))?
            } else {
                let contents = store.read(&entry.name).map_err(|source| BuildError::Read {
                    path: entry.name.clone(),
                    source,
                })?;
                let value =
                    self.parser
                        .parse(&contents)
                        .map_err(|source| BuildError::Parse {
                            path: entry.name.clone(),
                            source,
                        })?;
                DocumentNode::Leaf(value)
            };
            fields.insert(entry.name, node);
        }
        Ok(DocumentNode::Branch(fields))
    }
}

/// Error aborting a document build.
///
/// Every variant names the offending path relative to the root store, so a
/// failure deep in a subtree still reports where the traversal stopped.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Listing a directory, or scoping into it, failed.
    #[error("{path}: {source}")]
    List {
        /// Path of the directory, relative to the root store.
        path: String,
        /// The store's error.
        source: std::io::Error,
    },

    /// Reading a file failed.
    #[error("{path}: {source}")]
    Read {
        /// Path of the file, relative to the root store.
        path: String,
        /// The store's error.
        source: std::io::Error,
    },

    /// Parsing a file's contents failed.
    #[error("{path}: {source}")]
    Parse {
        /// Path of the file, relative to the root store.
        path: String,
        /// The parser's error.
        source: ParseError,
    },
}

impl BuildError {
    /// Returns the offending path, relative to the root store.
    pub fn path(&self) -> &str {
        match self {
            BuildError::List { path, .. }
            | BuildError::Read { path, .. }
            | BuildError::Parse { path, .. } => path,
        }
    }

    /// Re-anchors the offending path under a parent directory.
    fn prefixed(self, dir: &str) -> Self {
        let rebase = |path: String| {
            if path == "." {
                dir.to_string()
            } else {
                format!("{}/{}", dir, path)
            }
        };
        match self {
            BuildError::List { path, source } => BuildError::List {
                path: rebase(path),
                source,
            },
            BuildError::Read { path, source } => BuildError::Read {
                path: rebase(path),
                source,
            },
            BuildError::Parse { path, source } => BuildError::Parse {
                path: rebase(path),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::YamlParser;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_empty_store_builds_empty_branch() {
        let document = TreeBuilder::new(YamlParser)
            .build(&MemoryStore::new())
            .unwrap();

        assert_eq!(document.as_branch().unwrap().len(), 0);
    }

    #[test]
    fn test_fields_follow_traversal_order() {
        let store = MemoryStore::new()
            .file("z.yml", "z: 26")
            .file("a.yml", "a: 1")
            .dir("m", MemoryStore::new());

        let document = TreeBuilder::new(YamlParser).build(&store).unwrap();

        let names: Vec<_> = document.as_branch().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["a.yml", "m", "z.yml"]);
    }

    #[test]
    fn test_parse_error_names_nested_path() {
        let store = MemoryStore::new().dir(
            "b",
            MemoryStore::new().dir("c", MemoryStore::new().file("bad.yml", "x: [unclosed")),
        );

        let err = TreeBuilder::new(YamlParser).build(&store).unwrap_err();

        assert!(matches!(err, BuildError::Parse { .. }));
        assert_eq!(err.path(), "b/c/bad.yml");
    }

    #[test]
    fn test_deep_nesting_mirrors_hierarchy() {
        let store = MemoryStore::new().dir(
            "a",
            MemoryStore::new().dir("b", MemoryStore::new().file("c.yml", "v: true")),
        );

        let document = TreeBuilder::new(YamlParser).build(&store).unwrap();

        assert_eq!(
            document
                .get("a")
                .unwrap()
                .get("b")
                .unwrap()
                .get("c.yml")
                .unwrap()
                .as_leaf(),
            Some(&json!({"v": true}))
        );
    }
}
