//! Depth-bounded folder walk
//!
//! Enumerates every non-excluded subdirectory beneath a root, depth first,
//! one directory listing at a time. Listing failures abandon only the
//! affected subtree; the walk always carries on with the siblings.

use super::lister::DirectoryLister;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Deepest directory level whose contents are listed (the root is level 0)
pub const MAX_SEARCH_DEPTH: usize = 10;

/// Directory names that are never listed or descended into
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "out",
    ".vscode",
    "vendor",
    "target",
    ".next",
    ".svelte-kit",
    "coverage",
    ".cache",
    ".parcel-cache",
    ".turbo",
];

/// Set of bare directory names skipped during the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Add more names on top of the current set
    #[must_use]
    pub fn with_extra<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty()),
        );
        self
    }

    /// Check whether a bare directory name is excluded
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of excluded names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::empty().with_extra(DEFAULT_EXCLUDED_DIRS.iter().copied())
    }
}

/// Options controlling a folder walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    /// Deepest level that gets listed; records reach one level further
    pub max_depth: usize,
    /// Names that are skipped entirely
    pub exclusions: ExclusionSet,
}

impl CollectOptions {
    /// Override the depth bound
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the exclusion set
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            exclusions: ExclusionSet::default(),
        }
    }
}

/// A discovered folder and its path relative to the walked root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderRecord {
    /// Full location of the folder
    pub location: PathBuf,
    /// "/"-separated path relative to the root
    pub relative_path: String,
}

/// Collect every folder beneath `root`
///
/// Unreadable directories are skipped silently: their descendants are
/// missing from the result but the rest of the tree is still collected.
pub fn collect_folders<L>(lister: &L, root: &Path, options: &CollectOptions) -> Vec<FolderRecord>
where
    L: DirectoryLister + ?Sized,
{
    let mut folders = Vec::new();
    walk(lister, root, root, 0, options, &mut folders);
    folders
}

fn walk<L>(
    lister: &L,
    root: &Path,
    dir: &Path,
    depth: usize,
    options: &CollectOptions,
    folders: &mut Vec<FolderRecord>,
) where
    L: DirectoryLister + ?Sized,
{
    if depth > options.max_depth {
        return;
    }

    let entries = match lister.list(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping unreadable directory {}: {e}", dir.display());
            return;
        }
    };

    for entry in entries {
        if !entry.is_dir || options.exclusions.contains(&entry.name) {
            continue;
        }

        let location = dir.join(&entry.name);
        folders.push(FolderRecord {
            relative_path: relative_path(root, &location),
            location: location.clone(),
        });

        walk(lister, root, &location, depth + 1, options, folders);
    }
}

/// Render `folder` relative to `root` with "/" separators
///
/// Falls back to the folder's full path when `root` is not a prefix of it.
#[must_use]
pub fn relative_path(root: &Path, folder: &Path) -> String {
    folder.strip_prefix(root).map_or_else(
        |_| slash_joined(folder, true),
        |rest| slash_joined(rest, false),
    )
}

fn slash_joined(path: &Path, keep_root: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::RootDir if keep_root => absolute = true,
            Component::Prefix(prefix) if keep_root => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::ParentDir => parts.push("..".to_string()),
            _ => {}
        }
    }

    let joined = parts.join("/");
    if absolute { format!("/{joined}") } else { joined }
}
