//! Test fixtures and builders

use anyhow::Result;
use nested_roots::core::{Describer, Description};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A directory tree on disk with automatic cleanup
pub struct TreeBuilder {
    pub temp_dir: TempDir,
}

impl TreeBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a relative entry
    pub fn join(&self, rel: &str) -> PathBuf {
        self.path().join(rel)
    }

    /// Creates a directory (and its parents)
    pub fn dir(self, rel: &str) -> Result<Self> {
        std::fs::create_dir_all(self.join(rel))?;
        Ok(self)
    }

    /// Creates a file, creating parent directories as needed
    pub fn file(self, rel: &str, content: &str) -> Result<Self> {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(self)
    }
}

/// Describer backed by a path map; everything else is "not versioned"
///
/// Records every path it was asked about so tests can check pruning.
#[derive(Clone, Default)]
pub struct FakeDescriber {
    answers: HashMap<PathBuf, Description>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeDescriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, description: Description) -> Self {
        self.answers.insert(path.into(), description);
        self
    }

    /// Shorthand for a successful answer
    pub fn working_copy(self, path: impl Into<PathBuf>, url: &str, root: &str) -> Self {
        self.with(path, Description::info(url, root))
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_asked(&self, path: &Path) -> bool {
        self.calls().iter().any(|p| p == path)
    }

    pub fn asked_below(&self, path: &Path) -> bool {
        self.calls().iter().any(|p| p != path && p.starts_with(path))
    }
}

impl Describer for FakeDescriber {
    fn describe(&self, path: &Path) -> Description {
        self.calls.lock().unwrap().push(path.to_path_buf());
        self.answers
            .get(path)
            .cloned()
            .unwrap_or(Description::NotVersioned)
    }
}
