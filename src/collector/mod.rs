//! Folder collection
//!
//! Walks workspace roots and produces one [`FolderRecord`] per reachable,
//! non-excluded directory.
//!
//! # Example
//!
//! ```no_run
//! use goto_folder::collector::{CollectOptions, LocalFs, WorkspaceRoot, collect_workspace};
//!
//! let roots = vec![WorkspaceRoot::from_path(".")];
//! let folders = collect_workspace(&LocalFs::new(), &roots, &CollectOptions::default());
//!
//! for folder in folders {
//!     println!("{}", folder.relative_path);
//! }
//! ```

mod lister;
mod roots;
mod walk;

pub use lister::{DirEntryInfo, DirectoryLister, LocalFs};
pub use roots::{WorkspaceRoot, collect_workspace};
pub use walk::{
    CollectOptions, DEFAULT_EXCLUDED_DIRS, ExclusionSet, FolderRecord, MAX_SEARCH_DEPTH,
    collect_folders, relative_path,
};
