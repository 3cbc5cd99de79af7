//! Read-only file stores for tree assembly.
//!
//! This module provides the [`FileStore`] seam the tree builder traverses,
//! plus two implementations: [`DirStore`] over a real directory and
//! [`MemoryStore`] for in-memory fixtures.

use std::io;

mod dir;
mod memory;

pub use dir::DirStore;
pub use memory::MemoryStore;

/// A single entry in a store listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name, including any extension. Never a path.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl DirEntry {
    /// Creates a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Creates a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// An abstract read-only hierarchical file store.
///
/// `FileStore` is the seam to the filesystem collaborator: listing must be
/// deterministic and lexical by name, and `sub` scopes a store to one
/// subdirectory so a recursive traversal never addresses entries by composed
/// paths. A caller needing cancellation or timeouts imposes them in its own
/// implementation.
pub trait FileStore {
    /// Lists the entries of the store root, lexically ordered by name.
    fn list(&self) -> io::Result<Vec<DirEntry>>;

    /// Reads the contents of the named file at the store root.
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Returns a store scoped to the named subdirectory of the store root.
    fn sub(&self, name: &str) -> io::Result<Self>
    where
        Self: Sized;
}
