//! Directory child enumeration

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the direct children of a directory
///
/// Order is up to the implementation but must be stable for a given tree.
pub trait ChildEnumerator {
    fn children(&self, directory: &Path) -> io::Result<Vec<PathBuf>>;

    fn is_directory(&self, path: &Path) -> bool;
}

/// Enumerates the real filesystem, sorted by file name
#[derive(Debug, Clone, Copy, Default)]
pub struct FsChildren {
    pub follow_links: bool,
}

impl ChildEnumerator for FsChildren {
    fn children(&self, directory: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(directory)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect::<Vec<_>>();
        entries.sort();
        Ok(entries)
    }

    fn is_directory(&self, path: &Path) -> bool {
        if self.follow_links {
            path.is_dir()
        } else {
            fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
        }
    }
}
