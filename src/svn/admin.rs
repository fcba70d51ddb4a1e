//! Subversion administrative directory detection

use std::path::Path;

use crate::core::config::{SVN_ADMIN_DIRECTORY, SVN_ALT_ADMIN_DIRECTORY};
use crate::core::AdministrativeTest;

/// Returns true for `.svn` (and the `_svn` variant used by some Windows builds)
pub fn is_admin_directory(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name == SVN_ADMIN_DIRECTORY || name == SVN_ALT_ADMIN_DIRECTORY)
}

/// Default administrative test for Subversion working copies
#[derive(Debug, Clone, Copy, Default)]
pub struct SvnAdminDirectories;

impl AdministrativeTest for SvnAdminDirectories {
    fn is_administrative(&self, path: &Path) -> bool {
        is_admin_directory(path)
    }
}
