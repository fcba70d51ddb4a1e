//! Boundary records and scan outcomes

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use super::resolver::{placeholder_url, DescribeError};

/// A directory where an independently rooted working copy begins.
///
/// Either both URLs are real (`error` is `None`) or resolution failed and both
/// URLs are synthetic `file://` placeholders naming the directory on disk.
/// Placeholder URLs must never be fed back into VCS operations; check
/// [`BoundaryNode::has_placeholder_urls`] first.
#[derive(Debug, Clone, Serialize)]
pub struct BoundaryNode {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub directory: PathBuf,
    pub url: String,
    pub repository_root_url: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<Arc<DescribeError>>,
}

impl BoundaryNode {
    /// A successfully resolved working copy root
    pub fn resolved(
        directory: impl Into<PathBuf>,
        url: impl Into<String>,
        repository_root_url: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            url: url.into(),
            repository_root_url: repository_root_url.into(),
            error: None,
        }
    }

    /// A boundary that was detected but could not be resolved
    pub fn failed(directory: impl Into<PathBuf>, error: DescribeError) -> Self {
        let directory = directory.into();
        let fake = placeholder_url(&directory);
        Self {
            directory,
            url: fake.clone(),
            repository_root_url: fake,
            error: Some(Arc::new(error)),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when `url` and `repository_root_url` are synthetic placeholders
    pub fn has_placeholder_urls(&self) -> bool {
        self.is_error()
    }
}

/// Directory names need not be UTF-8; reports carry them lossily rather than failing
fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: serde::Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

fn serialize_error<S>(error: &Option<Arc<DescribeError>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Scan-level failure. Per-node failures never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("operation cancelled")]
    Cancelled,
}

/// Result of one scan: either the complete ordered list or an explicit cancellation
#[derive(Debug, Clone)]
#[must_use]
pub enum ScanOutcome {
    Completed(Vec<BoundaryNode>),
    Cancelled,
}

impl ScanOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScanOutcome::Cancelled)
    }

    /// Converts into a `Result` so callers can use `?`
    pub fn into_result(self) -> Result<Vec<BoundaryNode>, ScanError> {
        match self {
            ScanOutcome::Completed(nodes) => Ok(nodes),
            ScanOutcome::Cancelled => Err(ScanError::Cancelled),
        }
    }
}
