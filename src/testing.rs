//! Testing utilities for goto-folder
//!
//! Provides [`MemoryLister`], an in-memory directory tree that can be told
//! to fail on specific directories, so walk behavior can be checked without
//! touching the real filesystem, and [`RecordingWriter`], which keeps what
//! commands print.
//!
//! Only available when compiled with `cfg(test)`.

use crate::collector::{DirEntryInfo, DirectoryLister};
use crate::ui::OutputWriter;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory directory tree
///
/// Directories that were never given entries list as empty.
#[derive(Debug, Default, Clone)]
pub struct MemoryLister {
    entries: HashMap<PathBuf, Vec<DirEntryInfo>>,
    failing: HashSet<PathBuf>,
}

impl MemoryLister {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add subdirectories to `dir`
    #[must_use]
    pub fn with_dirs(mut self, dir: impl AsRef<Path>, names: &[&str]) -> Self {
        self.entries
            .entry(dir.as_ref().to_path_buf())
            .or_default()
            .extend(names.iter().map(|name| DirEntryInfo::dir(*name)));
        self
    }

    /// Add plain files to `dir`
    #[must_use]
    pub fn with_files(mut self, dir: impl AsRef<Path>, names: &[&str]) -> Self {
        self.entries
            .entry(dir.as_ref().to_path_buf())
            .or_default()
            .extend(names.iter().map(|name| DirEntryInfo::file(*name)));
        self
    }

    /// Make listing `dir` fail with a permission error
    #[must_use]
    pub fn failing(mut self, dir: impl AsRef<Path>) -> Self {
        self.failing.insert(dir.as_ref().to_path_buf());
        self
    }
}

impl DirectoryLister for MemoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        if self.failing.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", dir.display()),
            ));
        }
        Ok(self.entries.get(dir).cloned().unwrap_or_default())
    }
}

/// Which `OutputWriter` method produced a recorded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Write,
    Error,
    Success,
    Warning,
    Info,
}

/// Output writer that keeps every message in order
#[derive(Debug, Default)]
pub struct RecordingWriter {
    messages: RefCell<Vec<(Channel, String)>>,
}

impl RecordingWriter {
    /// Messages sent to `channel`, oldest first
    #[must_use]
    pub fn on(&self, channel: Channel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Result lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.on(Channel::Write)
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.on(Channel::Warning)
    }

    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.on(Channel::Info)
    }

    fn push(&self, channel: Channel, message: &str) {
        self.messages.borrow_mut().push((channel, message.to_string()));
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.push(Channel::Write, message);
    }

    fn error(&self, message: &str) {
        self.push(Channel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(Channel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(Channel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(Channel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_lister_lists_in_insertion_order() {
        let lister = MemoryLister::new()
            .with_dirs("/ws", &["b", "a"])
            .with_files("/ws", &["f.txt"]);

        let entries = lister.list(Path::new("/ws")).unwrap();

        assert_eq!(
            entries,
            vec![
                DirEntryInfo::dir("b"),
                DirEntryInfo::dir("a"),
                DirEntryInfo::file("f.txt"),
            ]
        );
    }

    #[test]
    fn test_memory_lister_unknown_dir_is_empty() {
        let lister = MemoryLister::new();
        assert!(lister.list(Path::new("/nowhere")).unwrap().is_empty());
    }

    #[test]
    fn test_memory_lister_failure() {
        let lister = MemoryLister::new().failing("/locked");
        let err = lister.list(Path::new("/locked")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_recording_writer_splits_channels() {
        let output = RecordingWriter::default();
        output.write("a");
        output.warning("careful");
        output.write("b");
        output.error("boom");

        assert_eq!(output.lines(), vec!["a", "b"]);
        assert_eq!(output.warnings(), vec!["careful"]);
        assert_eq!(output.on(Channel::Error), vec!["boom"]);
        assert!(output.infos().is_empty());
    }
}
