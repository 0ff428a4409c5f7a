//! Configuration module for goto-folder
//!
//! Manages persisted defaults: workspace roots, walk limits, and how a
//! chosen folder is revealed. Configuration is stored in the user's config
//! directory and can be overridden per run by `GOTO_FOLDER_*` environment
//! variables and command-line flags.

use crate::collector::{MAX_SEARCH_DEPTH, WorkspaceRoot};
use crate::ui::RevealMode;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: [&str; 5] = ["roots", "max_depth", "extra_exclusions", "reveal", "quiet"];

/// A configured workspace root
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RootConfig {
    /// Display name used in multi-root prefixes; defaults to the directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Root directory
    pub path: PathBuf,
}

impl RootConfig {
    /// Resolve into a workspace root
    #[must_use]
    pub fn to_workspace_root(&self) -> WorkspaceRoot {
        match &self.name {
            Some(name) => WorkspaceRoot::new(name.clone(), self.path.clone()),
            None => WorkspaceRoot::from_path(self.path.clone()),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GotoConfig {
    /// Deepest directory level whose children are still listed
    pub max_depth: usize,

    /// Directory names skipped in addition to the built-in exclusions
    pub extra_exclusions: Vec<String>,

    /// How a chosen folder is revealed
    pub reveal: RevealMode,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Roots walked when none are given on the command line
    pub roots: Vec<RootConfig>,
}

impl Default for GotoConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            extra_exclusions: Vec::new(),
            reveal: RevealMode::default(),
            quiet: false,
            roots: Vec::new(),
        }
    }
}

impl GotoConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("goto-folder").join("config.toml"))
    }

    /// Load configuration from `path`, layering environment overrides on top
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("GOTO_FOLDER")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("extra_exclusions"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render a single value as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "roots" => Ok(self
                .roots
                .iter()
                .map(|r| r.path.display().to_string())
                .collect::<Vec<_>>()
                .join(",")),
            "max_depth" => Ok(self.max_depth.to_string()),
            "extra_exclusions" => Ok(self.extra_exclusions.join(",")),
            "reveal" => Ok(self.reveal.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a single value from text; list values are comma separated
    ///
    /// Does not save.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "roots" => {
                self.roots = split_list(value)
                    .map(|path| RootConfig {
                        name: None,
                        path: PathBuf::from(path),
                    })
                    .collect();
            }
            "max_depth" => {
                self.max_depth = value
                    .parse()
                    .map_err(|_| invalid_value(key, value, "a non-negative integer"))?;
            }
            "extra_exclusions" => {
                self.extra_exclusions = split_list(value).map(str::to_string).collect();
            }
            "reveal" => {
                self.reveal = value
                    .parse()
                    .map_err(|_| invalid_value(key, value, "'print' or 'open'"))?;
            }
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| invalid_value(key, value, "'true' or 'false'"))?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown config key '{key}' (expected one of: {})",
        CONFIG_KEYS.join(", ")
    ))
}

fn invalid_value(key: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::Message(format!("Invalid value '{value}' for {key}: expected {expected}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GotoConfig::default();
        assert!(config.roots.is_empty());
        assert_eq!(config.max_depth, 10);
        assert_eq!(config.reveal, RevealMode::Print);
        assert!(!config.quiet);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = GotoConfig::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, GotoConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = GotoConfig::default();
        config.roots.push(RootConfig {
            name: Some("work".to_string()),
            path: PathBuf::from("/srv/work"),
        });
        config.max_depth = 4;
        config.extra_exclusions = vec!["vendor".to_string()];
        config.reveal = RevealMode::Open;
        config.save_to(&path).unwrap();

        let loaded = GotoConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let config = GotoConfig::load_from(&path).unwrap();
        assert!(config.quiet);
        assert_eq!(config.max_depth, MAX_SEARCH_DEPTH);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = GotoConfig::default();

        config.set("max_depth", "3").unwrap();
        config.set("reveal", "open").unwrap();
        config.set("extra_exclusions", "vendor, tmp,").unwrap();
        config.set("roots", "/a,/b").unwrap();

        assert_eq!(config.get("max_depth").unwrap(), "3");
        assert_eq!(config.get("reveal").unwrap(), "open");
        assert_eq!(config.get("extra_exclusions").unwrap(), "vendor,tmp");
        assert_eq!(config.get("roots").unwrap(), "/a,/b");
        assert_eq!(config.roots[1].to_workspace_root().name, "b");
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = GotoConfig::default();
        assert!(config.set("max_depth", "-1").is_err());
        assert!(config.set("reveal", "explode").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
        assert_eq!(config, GotoConfig::default());
    }

    #[test]
    fn test_named_root() {
        let root = RootConfig {
            name: Some("api".to_string()),
            path: PathBuf::from("/srv/backend"),
        };
        assert_eq!(root.to_workspace_root().name, "api");
    }
}
