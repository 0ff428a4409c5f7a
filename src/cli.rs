//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for goto-folder using the `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Interactive folder picker (default)
//! - **list**: Print every collected folder
//! - **search**: Rank folders against a query without a UI
//! - **config**: Inspect and edit the configuration file
//! - **completions**: Generate a shell completion script
//!
//! # Examples
//!
//! ```
//! use goto_folder::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["goto-folder", "-r", "/srv/work", "search", "src"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use crate::GotoError;
use crate::collector::{
    CollectOptions, DirectoryLister, ExclusionSet, WorkspaceRoot, collect_workspace,
};
use crate::config::{GotoConfig, RootConfig};
use crate::fuzzy;
use crate::picker::PickerError;
use crate::ui::{OutputWriter, RevealMode};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Host command identifier for the picker entry point
pub const OPEN_FOLDER_COMMAND_ID: &str = "go-to-folder.openFolder";

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "goto-folder")]
#[command(about = "Fuzzy-find a folder in your workspace and go to it", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root to search (repeatable; defaults to configured roots, then the current directory)
    #[arg(short = 'r', long = "root", value_name = "DIR", global = true)]
    pub roots: Vec<PathBuf>,

    /// Deepest directory level whose children are listed
    #[arg(long = "max-depth", value_name = "N", global = true)]
    pub max_depth: Option<usize>,

    /// Extra directory name to skip (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "NAME", global = true)]
    pub exclude: Vec<String>,

    /// How to reveal the chosen folder (overrides config)
    #[arg(long = "reveal", value_enum, global = true)]
    pub reveal: Option<RevealMode>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive folder picker (default)
    #[command(visible_alias = "p")]
    Pick,

    /// Print every folder the picker would offer
    #[command(visible_alias = "ls")]
    List {
        /// Print a JSON array instead of one relative path per line
        #[arg(long)]
        json: bool,
    },

    /// Rank folders against QUERY and print `score<TAB>folder` lines
    #[command(visible_alias = "s")]
    Search {
        /// Fuzzy query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Print at most N matches
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `max_depth`)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., reveal=open)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick)
    }

    /// Walk options from config, with command-line flags taking precedence
    #[must_use]
    pub fn collect_options(&self, config: &GotoConfig) -> CollectOptions {
        let exclusions = ExclusionSet::default()
            .with_extra(config.extra_exclusions.iter().chain(self.exclude.iter()));

        CollectOptions::default()
            .with_max_depth(self.max_depth.unwrap_or(config.max_depth))
            .with_exclusions(exclusions)
    }

    /// Reveal mode from config, with the command-line flag taking precedence
    #[must_use]
    pub fn reveal_mode(&self, config: &GotoConfig) -> RevealMode {
        self.reveal.unwrap_or(config.reveal)
    }

    /// Roots to walk before existence checks
    ///
    /// Command-line roots win over configured roots; with neither, `cwd` is
    /// the only root.
    #[must_use]
    pub fn root_candidates(&self, config: &GotoConfig, cwd: &Path) -> Vec<RootConfig> {
        if !self.roots.is_empty() {
            self.roots
                .iter()
                .map(|path| RootConfig {
                    name: None,
                    path: path.clone(),
                })
                .collect()
        } else if !config.roots.is_empty() {
            config.roots.clone()
        } else {
            vec![RootConfig {
                name: None,
                path: cwd.to_path_buf(),
            }]
        }
    }

    /// Whether informational output is suppressed
    #[must_use]
    pub const fn is_quiet(&self, config: &GotoConfig) -> bool {
        self.quiet || config.quiet
    }
}

/// Keep the candidates that are existing directories, canonicalized
///
/// Each skipped candidate is reported through `output`.
///
/// # Errors
///
/// Returns `PickerError::NoWorkspace` when no usable root remains.
pub fn resolve_roots(
    candidates: Vec<RootConfig>,
    output: &dyn OutputWriter,
) -> Result<Vec<WorkspaceRoot>, GotoError> {
    let mut roots = Vec::new();

    for candidate in candidates {
        match fs::canonicalize(&candidate.path) {
            Ok(path) if path.is_dir() => {
                let root = RootConfig {
                    name: candidate.name,
                    path,
                };
                roots.push(root.to_workspace_root());
            }
            _ => output.warning(&format!(
                "Skipping workspace root {}: not a directory",
                candidate.path.display()
            )),
        }
    }

    if roots.is_empty() {
        return Err(PickerError::NoWorkspace.into());
    }
    debug!(count = roots.len(), "resolved workspace roots");
    Ok(roots)
}

/// Print every collected folder, one relative path per line or as JSON
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub fn list_folders<L>(
    lister: &L,
    roots: &[WorkspaceRoot],
    options: &CollectOptions,
    json: bool,
    output: &dyn OutputWriter,
) -> Result<(), GotoError>
where
    L: DirectoryLister + ?Sized,
{
    let records = collect_workspace(lister, roots, options);

    if json {
        output.write(&serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        output.info("No folders found");
    } else {
        for record in &records {
            output.write(&record.relative_path);
        }
    }
    Ok(())
}

/// Print `score<TAB>folder` for the best matches of `query`
///
/// Returns whether anything matched.
pub fn search_folders<L>(
    lister: &L,
    roots: &[WorkspaceRoot],
    options: &CollectOptions,
    query: &str,
    limit: Option<usize>,
    output: &dyn OutputWriter,
) -> bool
where
    L: DirectoryLister + ?Sized,
{
    let records = collect_workspace(lister, roots, options);
    let ranked = fuzzy::rank(query, &records, |r| r.relative_path.as_str());

    if ranked.is_empty() {
        output.info(&format!("No folders match '{query}'"));
        return false;
    }

    for hit in ranked.iter().take(limit.unwrap_or(usize::MAX)) {
        output.write(&format!("{}\t{}", hit.score, records[hit.index].relative_path));
    }
    true
}

/// Split a `key=value` setting
///
/// Returns `None` when there is no '=' or the key is empty.
#[must_use]
pub fn parse_setting(setting: &str) -> Option<(&str, &str)> {
    let (key, value) = setting.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Write a completion script for `shell`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
