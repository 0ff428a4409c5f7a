//! Workspace roots and multi-root collection

use super::lister::DirectoryLister;
use super::walk::{CollectOptions, FolderRecord, collect_folders};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A top-level location folder search starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceRoot {
    /// Display name, used to prefix paths in multi-root workspaces
    pub name: String,
    /// Location of the root directory
    pub path: PathBuf,
}

impl WorkspaceRoot {
    /// Create a root with an explicit display name
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a root named after its final path component
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = default_root_name(&path);
        Self { name, path }
    }
}

fn default_root_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Collect folders from every root
///
/// Each root is walked on its own and the results are concatenated in root
/// order. With more than one root, relative paths are prefixed with
/// `#<root name>/` so folders from different roots stay distinguishable.
pub fn collect_workspace<L>(
    lister: &L,
    roots: &[WorkspaceRoot],
    options: &CollectOptions,
) -> Vec<FolderRecord>
where
    L: DirectoryLister + ?Sized,
{
    let multi_root = roots.len() > 1;
    let mut all_folders = Vec::new();

    for root in roots {
        let folders = collect_folders(lister, &root.path, options);
        debug!(
            "Collected {} folders under {} ({})",
            folders.len(),
            root.name,
            root.path.display()
        );

        if multi_root {
            let prefix = format!("#{}/", root.name);
            all_folders.extend(folders.into_iter().map(|folder| FolderRecord {
                relative_path: format!("{prefix}{}", folder.relative_path),
                location: folder.location,
            }));
        } else {
            all_folders.extend(folders);
        }
    }

    info!(
        "Collected {} folders from {} root(s)",
        all_folders.len(),
        roots.len()
    );
    all_folders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryLister;

    #[test]
    fn test_root_name_from_path() {
        let root = WorkspaceRoot::from_path("/home/me/projects/website");
        assert_eq!(root.name, "website");
        assert_eq!(root.path, PathBuf::from("/home/me/projects/website"));
    }

    #[test]
    fn test_filesystem_root_name_is_full_path() {
        let root = WorkspaceRoot::from_path("/");
        assert_eq!(root.name, "/");
    }

    #[test]
    fn test_single_root_has_no_prefix() {
        let lister = MemoryLister::new().with_dirs("/ws", &["src"]);
        let roots = vec![WorkspaceRoot::from_path("/ws")];

        let records = collect_workspace(&lister, &roots, &CollectOptions::default());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relative_path, "src");
    }

    #[test]
    fn test_multiple_roots_are_prefixed_and_concatenated() {
        let lister = MemoryLister::new()
            .with_dirs("/code/api", &["handlers"])
            .with_dirs("/code/web", &["pages", "components"]);
        let roots = vec![
            WorkspaceRoot::from_path("/code/api"),
            WorkspaceRoot::new("frontend", "/code/web"),
        ];

        let records = collect_workspace(&lister, &roots, &CollectOptions::default());
        let paths: Vec<&str> = records.iter().map(|r| r.relative_path.as_str()).collect();

        assert_eq!(
            paths,
            vec!["#api/handlers", "#frontend/pages", "#frontend/components"]
        );
        assert_eq!(records[1].location, PathBuf::from("/code/web/pages"));
    }

    #[test]
    fn test_no_roots_collects_nothing() {
        let lister = MemoryLister::new();
        let records = collect_workspace(&lister, &[], &CollectOptions::default());
        assert!(records.is_empty());
    }
}
