//! Root-membership predicates used to prune the traversal

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

use super::config::{ConfigError, DEFAULT_SKIP_DIRECTORIES};

/// Decides whether a child directory still belongs to the scanned root
pub trait RootMembership {
    fn accepts(&self, root: &Path, candidate: &Path) -> bool;
}

impl<F> RootMembership for F
where
    F: Fn(&Path, &Path) -> bool,
{
    fn accepts(&self, root: &Path, candidate: &Path) -> bool {
        self(root, candidate)
    }
}

/// Accepts every candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl RootMembership for AcceptAll {
    fn accepts(&self, _root: &Path, _candidate: &Path) -> bool {
        true
    }
}

/// Rejects well-known foreign directories and gitignore-style exclude patterns
#[derive(Debug, Clone)]
pub struct ExcludeMembership {
    skip_names: Vec<String>,
    patterns: Gitignore,
}

impl ExcludeMembership {
    /// Builds a predicate for `root` from directory names and exclude patterns
    ///
    /// Patterns use gitignore syntax and are anchored at `root`.
    pub fn new<S: AsRef<str>>(
        root: &Path,
        skip_names: &[S],
        patterns: &[S],
    ) -> Result<Self, ConfigError> {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in patterns {
            builder
                .add_line(None, pattern.as_ref())
                .map_err(|e| ConfigError::InvalidPattern {
                    pattern: pattern.as_ref().to_string(),
                    message: e.to_string(),
                })?;
        }
        let patterns = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: String::new(),
            message: e.to_string(),
        })?;

        Ok(Self {
            skip_names: skip_names.iter().map(|s| s.as_ref().to_string()).collect(),
            patterns,
        })
    }

    /// The default skip list with no extra patterns
    pub fn with_defaults(root: &Path) -> Result<Self, ConfigError> {
        Self::new(root, DEFAULT_SKIP_DIRECTORIES, &[])
    }
}

impl RootMembership for ExcludeMembership {
    fn accepts(&self, root: &Path, candidate: &Path) -> bool {
        let name = candidate
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");
        if self.skip_names.iter().any(|skip| skip == name) {
            return false;
        }

        // Patterns are anchored at the root they were built for
        if candidate.strip_prefix(root).is_err() {
            return true;
        }
        !self
            .patterns
            .matched(candidate, candidate.is_dir())
            .is_ignore()
    }
}
