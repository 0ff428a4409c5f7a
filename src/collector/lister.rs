//! Directory listing seam
//!
//! The walk never touches `std::fs` directly. It asks a [`DirectoryLister`]
//! for the immediate entries of one directory at a time, which keeps the
//! traversal testable with in-memory trees and injected read failures.

use std::fs;
use std::io;
use std::path::Path;

/// One row of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Bare entry name (no path components)
    pub name: String,
    /// Whether the entry is (or resolves to) a directory
    pub is_dir: bool,
}

impl DirEntryInfo {
    /// Create a directory entry
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Create a non-directory entry
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Lists the immediate entries of a directory
pub trait DirectoryLister {
    /// List the entries directly inside `dir`
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the directory cannot be read.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

impl<L: DirectoryLister + ?Sized> DirectoryLister for &L {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        (**self).list(dir)
    }
}

/// Lister backed by the local filesystem
///
/// Entries come back sorted by name. A symlink counts as a directory when
/// its target is one; broken links are reported as plain entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new local filesystem lister
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalFs {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;

            let is_dir = if file_type.is_symlink() {
                fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir())
            } else {
                file_type.is_dir()
            };

            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
