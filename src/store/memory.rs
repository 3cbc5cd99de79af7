//! In-memory file store.

use std::collections::BTreeMap;
use std::io;

use super::{DirEntry, FileStore};

/// A single entry held by a [`MemoryStore`].
#[derive(Debug, Clone)]
enum MemoryEntry {
    /// File contents.
    File(Vec<u8>),
    /// A nested store.
    Dir(MemoryStore),
}

/// An in-memory [`FileStore`] for fixtures and tests.
///
/// Entries are kept in a `BTreeMap`, so listings come out in lexical order
/// no matter the insertion order. Stores nest to arbitrary depth through
/// [`MemoryStore::dir`].
///
/// # Example
///
/// ```rust
/// use debrief::{FileStore, MemoryStore};
///
/// let store = MemoryStore::new()
///     .file("a.yml", "x: 1")
///     .dir("b", MemoryStore::new().file("c.yml", "y: 2"));
///
/// let names: Vec<_> = store.list().unwrap().into_iter().map(|e| e.name).collect();
/// assert_eq!(names, vec!["a.yml", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, MemoryEntry>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given contents and returns self for chaining.
    pub fn file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.entries
            .insert(name.into(), MemoryEntry::File(contents.into()));
        self
    }

    /// Adds a subdirectory and returns self for chaining.
    pub fn dir(mut self, name: impl Into<String>, store: MemoryStore) -> Self {
        self.entries.insert(name.into(), MemoryEntry::Dir(store));
        self
    }
}

fn not_found(name: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no such entry: {}", name))
}

impl FileStore for MemoryStore {
    fn list(&self) -> io::Result<Vec<DirEntry>> {
        // BTreeMap iteration is already lexical by name.
        Ok(self
            .entries
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                is_dir: matches!(entry, MemoryEntry::Dir(_)),
            })
            .collect())
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        match self.entries.get(name) {
            Some(MemoryEntry::File(contents)) => Ok(contents.clone()),
            Some(MemoryEntry::Dir(_)) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", name),
            )),
            None => Err(not_found(name)),
        }
    }

    fn sub(&self, name: &str) -> io::Result<Self> {
        match self.entries.get(name) {
            Some(MemoryEntry::Dir(store)) => Ok(store.clone()),
            Some(MemoryEntry::File(_)) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", name),
            )),
            None => Err(not_found(name)),
        }
    }
}
