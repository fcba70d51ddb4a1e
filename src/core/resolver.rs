//! Node resolution: turns one "describe this directory" call into a boundary record or nothing

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use super::node::BoundaryNode;

/// Characters escaped in synthetic `file://` placeholder URLs
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where a describe failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeErrorKind {
    /// The VCS backend ran and reported an error
    Backend,
    /// The backend could not be invoked or its output could not be read
    Io,
}

/// Opaque failure reported by a [`Describer`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", with_code_prefix(.code, .message))]
pub struct DescribeError {
    pub kind: DescribeErrorKind,
    pub code: Option<u32>,
    pub message: String,
}

impl DescribeError {
    pub fn new(kind: DescribeErrorKind, code: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(DescribeErrorKind::Io, None, message)
    }
}

/// `E######: message`, unless the message already leads with its code
fn with_code_prefix(code: &Option<u32>, message: &str) -> String {
    match code {
        Some(code) if !message.starts_with(&format!("E{code:06}")) => {
            format!("E{code:06}: {message}")
        }
        _ => message.to_string(),
    }
}

/// What a [`Describer`] learned about one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// The backend answered; either URL may still be missing
    Info {
        url: Option<String>,
        repository_root_url: Option<String>,
    },
    NotVersioned,
    Failed(DescribeError),
}

impl Description {
    pub fn info(url: impl Into<String>, repository_root_url: impl Into<String>) -> Self {
        Description::Info {
            url: Some(url.into()),
            repository_root_url: Some(repository_root_url.into()),
        }
    }
}

/// Queries the VCS backend for a directory's URL and repository root URL
///
/// Implementations own the backend's error vocabulary: an error that only means
/// "not a working copy here" must come back as [`Description::NotVersioned`],
/// anything in [`Description::Failed`] is reported as a failed boundary.
pub trait Describer {
    fn describe(&self, path: &Path) -> Description;
}

impl<F> Describer for F
where
    F: Fn(&Path) -> Description,
{
    fn describe(&self, path: &Path) -> Description {
        self(path)
    }
}

/// Resolves a single path into a boundary record
///
/// Returns `None` when the path is not a boundary and the caller should descend.
/// Never fails: backend failures are folded into a node carrying the error.
pub fn resolve<D: Describer + ?Sized>(path: &Path, describer: &D) -> Option<BoundaryNode> {
    match describer.describe(path) {
        Description::Failed(error) => {
            warn!("Failed to resolve {}: {}", path.display(), error);
            Some(BoundaryNode::failed(path, error))
        }
        Description::Info {
            url: Some(url),
            repository_root_url: Some(root),
        } => Some(BoundaryNode::resolved(path, url, root)),
        Description::Info { url, repository_root_url } => {
            // Partial info is treated like "not versioned": keep descending
            debug!(
                "Incomplete info for {} (url: {:?}, root: {:?})",
                path.display(),
                url,
                repository_root_url
            );
            None
        }
        Description::NotVersioned => None,
    }
}

/// Builds the synthetic `file://` URL used for nodes that failed to resolve
///
/// This is never a real VCS URL. It only names the directory on disk so
/// display code always has something to show. Relative paths are made
/// absolute against the current directory when possible.
pub fn placeholder_url(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut raw = absolute.to_string_lossy().replace('\\', "/");
    if !raw.starts_with('/') {
        raw.insert(0, '/');
    }
    format!("file://{}", utf8_percent_encode(&raw, PATH_ENCODE_SET))
}
