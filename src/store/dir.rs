//! Directory-backed file store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{DirEntry, FileStore};

/// A [`FileStore`] rooted at a directory on disk.
///
/// Listings are sorted lexically by entry name, so traversal order is
/// deterministic regardless of what order the operating system yields
/// entries in. Entry names must be valid UTF-8.
///
/// # Example
///
/// ```rust,no_run
/// use debrief::{DirStore, TreeBuilder, YamlParser};
///
/// let store = DirStore::new("packages/demo-2.0.0");
/// let document = TreeBuilder::new(YamlParser).build(&store)?;
/// # Ok::<(), debrief::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Creates a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileStore for DirStore {
    fn list(&self) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name().into_string().map_err(|name| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("non-UTF-8 entry name: {:?}", name),
                )
            })?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry { name, is_dir });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(name))
    }

    fn sub(&self, name: &str) -> io::Result<Self> {
        let root = self.root.join(name);
        if !fs::metadata(&root)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", root.display()),
            ));
        }
        Ok(Self { root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, DirStore) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.yml"), "x: 1\n").unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b").join("c.yml"), "y: 2\n").unwrap();
        let store = DirStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_list_sorted_with_kinds() {
        let (_dir, store) = fixture();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], DirEntry::file("a.yml"));
        assert_eq!(entries[1], DirEntry::dir("b"));
    }

    #[test]
    fn test_read_file_contents() {
        let (_dir, store) = fixture();
        assert_eq!(store.read("a.yml").unwrap(), b"x: 1\n");
    }

    #[test]
    fn test_sub_scopes_to_subdirectory() {
        let (_dir, store) = fixture();

        let sub = store.sub("b").unwrap();
        assert_eq!(sub.read("c.yml").unwrap(), b"y: 2\n");
    }

    #[test]
    fn test_sub_on_file_fails() {
        let (_dir, store) = fixture();
        assert!(store.sub("a.yml").is_err());
    }

    #[test]
    fn test_sub_on_missing_entry_fails() {
        let (_dir, store) = fixture();
        let err = store.sub("nope").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
