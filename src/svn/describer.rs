//! Describer backed by the `svn` command line client

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use super::error_code::{parse_error_codes, SvnErrorCode};
use crate::core::config::DEFAULT_SVN_BINARY;
use crate::core::{DescribeError, DescribeErrorKind, Describer, Description};

const URL_PREFIX: &str = "URL: ";
const NOT_VERSIONED_MARKER: &str = "(not a versioned resource)";
const REPOSITORY_ROOT_PREFIX: &str = "Repository Root: ";

/// Runs `svn info` for each path
#[derive(Debug, Clone)]
pub struct SvnCliDescriber {
    binary: PathBuf,
}

impl Default for SvnCliDescriber {
    fn default() -> Self {
        Self::new(DEFAULT_SVN_BINARY)
    }
}

impl SvnCliDescriber {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Checks that the client can be launched at all
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .args(["--version", "--quiet"])
            .output()
            .is_ok_and(|out| out.status.success())
    }

    /// `svn info` for one path; `--` keeps paths starting with `-` from being read as options
    fn info_command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args(["info", "--non-interactive", "--"])
            .arg(peg_safe(path))
            .env("LC_ALL", "C");
        command
    }
}

impl Describer for SvnCliDescriber {
    fn describe(&self, path: &Path) -> Description {
        let output = self.info_command(path).output();

        match output {
            Ok(out) if out.status.success() => parse_info(&String::from_utf8_lossy(&out.stdout)),
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                debug!("svn info {} failed: {}", path.display(), stderr.trim());
                classify(error_from_stderr(&stderr))
            }
            Err(e) => Description::Failed(DescribeError::io(format!(
                "failed to run {}: {e}",
                self.binary.display()
            ))),
        }
    }
}

/// `svn` treats the last `@` as a peg revision separator; a trailing `@` disables that
fn peg_safe(path: &Path) -> PathBuf {
    let raw = path.as_os_str().to_string_lossy();
    if raw.contains('@') {
        PathBuf::from(format!("{raw}@"))
    } else {
        path.to_path_buf()
    }
}

/// Pulls the URL and repository root out of `svn info` output
pub fn parse_info(stdout: &str) -> Description {
    let mut url = None;
    let mut repository_root_url = None;
    for line in stdout.lines() {
        if let Some(value) = line.strip_prefix(URL_PREFIX) {
            url = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(REPOSITORY_ROOT_PREFIX) {
            repository_root_url = Some(value.trim().to_string());
        }
    }
    Description::Info {
        url: url.filter(|u| !u.is_empty()),
        repository_root_url: repository_root_url.filter(|u| !u.is_empty()),
    }
}

/// Whether a reported error only says "the path is not (the root of) a working copy"
///
/// Launch failures are never classified this way, whatever their message.
pub fn is_unversioned_or_not_found(error: &DescribeError) -> bool {
    if error.kind != DescribeErrorKind::Backend {
        return false;
    }
    error
        .code
        .is_some_and(|code| SvnErrorCode(code).is_unversioned_or_not_found())
        || error.message.to_lowercase().contains(NOT_VERSIONED_MARKER)
}

/// Turns a failed `svn info` into [`Description::NotVersioned`] or [`Description::Failed`]
pub fn classify(error: DescribeError) -> Description {
    if is_unversioned_or_not_found(&error) {
        Description::NotVersioned
    } else {
        Description::Failed(error)
    }
}

/// Builds an error from `svn` stderr, preferring the first code that is a real failure
pub fn error_from_stderr(stderr: &str) -> DescribeError {
    let codes = parse_error_codes(stderr);
    let code = codes
        .iter()
        .copied()
        .find(|c| !c.is_unversioned_or_not_found())
        .or_else(|| codes.first().copied())
        .map(|SvnErrorCode(code)| code);

    let message = stderr
        .lines()
        .map(|line| line.trim().trim_start_matches("svn:").trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    DescribeError::new(DescribeErrorKind::Backend, code, message)
}
