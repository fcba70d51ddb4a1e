//! Subversion testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Checks if both the svn client and svnadmin are available in the system
pub fn is_svn_available() -> bool {
    ["svn", "svnadmin"].iter().all(|tool| {
        Command::new(tool)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    })
}

/// Creates a local repository and returns its `file://` URL
pub fn create_repository(path: &Path) -> Result<String> {
    let result = Command::new("svnadmin").arg("create").arg(path).output()?;
    if !result.status.success() {
        anyhow::bail!(
            "Failed to create repository: {}",
            String::from_utf8_lossy(&result.stderr)
        );
    }

    let canonical = path.canonicalize()?;
    Ok(format!("file://{}", canonical.display()))
}

/// Checks out `url` into `target`
pub fn checkout(url: &str, target: &Path) -> Result<()> {
    let result = Command::new("svn")
        .args(["checkout", "--non-interactive", "-q", url])
        .arg(target)
        .output()?;

    if !result.status.success() {
        anyhow::bail!(
            "Failed to check out {}: {}",
            url,
            String::from_utf8_lossy(&result.stderr)
        );
    }

    Ok(())
}

/// Creates a directory in the repository with a server-side mkdir
pub fn mkdir_in_repository(url: &str) -> Result<()> {
    let result = Command::new("svn")
        .args(["mkdir", "--non-interactive", "--parents", "-m", "create", url])
        .output()?;

    if !result.status.success() {
        anyhow::bail!(
            "Failed to create {}: {}",
            url,
            String::from_utf8_lossy(&result.stderr)
        );
    }

    Ok(())
}
