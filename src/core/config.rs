//! Configuration constants and settings

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Subversion backend
pub const DEFAULT_SVN_BINARY: &str = "svn";
pub const SVN_ADMIN_DIRECTORY: &str = ".svn";
// Windows/ASP.NET builds may use this name instead (SVN_ASP_DOT_NET_HACK)
pub const SVN_ALT_ADMIN_DIRECTORY: &str = "_svn";

// Environment overrides
pub const ENV_SVN_BINARY: &str = "NESTED_ROOTS_SVN";
pub const ENV_MAX_DEPTH: &str = "NESTED_ROOTS_MAX_DEPTH";

// Config files
pub const CONFIG_DIR_NAME: &str = "nested-roots";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ROOT_CONFIG_FILE_NAME: &str = ".nested-roots.toml";

// Directories never worth descending into: other VCS metadata and dependency caches
pub const DEFAULT_SKIP_DIRECTORIES: &[&str] = &[
    ".git",
    ".hg",
    ".bzr",
    "node_modules",
    "__pycache__",
    ".venv",
];

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 40;
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 60;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 57;

// UI Constants
pub const SCANNING_MESSAGE: &str = "🔍 Scanning for nested working copies...";
pub const NO_BOUNDARIES_MESSAGE: &str = "No nested working copies found.";
pub const CANCELLED_MESSAGE: &str = "⛔ Scan cancelled";
pub const SPINNER_TEMPLATE: &str = "{spinner} {wide_msg}";
pub const SPINNER_TICK_MS: u64 = 100;

// Pre-allocation hint for the work queue
pub const ESTIMATED_QUEUE_SIZE: usize = 256;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {name}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Settings for one scan, merged from files, environment and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub exclude: Vec<String>,
    pub skip_directories: Vec<String>,
    pub max_depth: Option<usize>,
    pub svn_binary: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            skip_directories: DEFAULT_SKIP_DIRECTORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_depth: None,
            svn_binary: DEFAULT_SVN_BINARY.to_string(),
        }
    }
}

/// On-disk shape of a config file; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    exclude: Vec<String>,
    skip_directories: Option<Vec<String>>,
    max_depth: Option<usize>,
    svn_binary: Option<String>,
}

impl ScanConfig {
    /// Loads defaults, then the global file, then `<root>/.nested-roots.toml`, then env
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(global) = global_config_path() {
            config.merge_file(&global)?;
        }
        config.merge_file(&root.join(ROOT_CONFIG_FILE_NAME))?;
        config.merge_env(|name| std::env::var(name).ok())?;

        Ok(config)
    }

    /// Merges a config file if it exists
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Ok(());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());

        self.exclude.extend(file.exclude);
        if let Some(skip) = file.skip_directories {
            self.skip_directories = skip;
        }
        if file.max_depth.is_some() {
            self.max_depth = file.max_depth;
        }
        if let Some(svn) = file.svn_binary {
            self.svn_binary = svn;
        }
        Ok(())
    }

    /// Applies environment overrides through `lookup`
    pub fn merge_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(svn) = lookup(ENV_SVN_BINARY).filter(|s| !s.trim().is_empty()) {
            self.svn_binary = svn;
        }
        if let Some(depth) = lookup(ENV_MAX_DEPTH) {
            let parsed = depth.trim().parse::<usize>().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_MAX_DEPTH,
                value: depth.clone(),
            })?;
            self.max_depth = Some(parsed);
        }
        Ok(())
    }
}

/// `~/.config/nested-roots/config.toml` or the platform equivalent
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
