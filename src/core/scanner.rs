//! Breadth-first discovery of nested working copy roots
//!
//! The scanner pulls one path at a time off a FIFO queue, asks the resolver
//! whether it is a working copy boundary, and only expands directories that
//! are not. Everything beneath a boundary is left alone: nested scans are the
//! caller's business.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::cancel::{CancellationSignal, NeverCancelled};
use super::children::{ChildEnumerator, FsChildren};
use super::config::ESTIMATED_QUEUE_SIZE;
use super::membership::{AcceptAll, RootMembership};
use super::node::{BoundaryNode, ScanOutcome};
use super::resolver::{resolve, Describer};
use super::stats::ScanStatistics;
use crate::svn::SvnAdminDirectories;

/// Recognizes VCS metadata directories whose children are never enumerated
pub trait AdministrativeTest {
    fn is_administrative(&self, path: &Path) -> bool;
}

impl<F> AdministrativeTest for F
where
    F: Fn(&Path) -> bool,
{
    fn is_administrative(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Sequential breadth-first scanner over one root
pub struct NestedScanner<'a> {
    describer: Box<dyn Describer + Send + 'a>,
    membership: Box<dyn RootMembership + Send + 'a>,
    administrative: Box<dyn AdministrativeTest + Send + 'a>,
    children: Box<dyn ChildEnumerator + Send + 'a>,
    cancel: Box<dyn CancellationSignal + Send + 'a>,
    max_depth: Option<usize>,
}

impl<'a> NestedScanner<'a> {
    /// Starts a builder with default collaborators around `describer`
    pub fn builder(describer: impl Describer + Send + 'a) -> NestedScannerBuilder<'a> {
        NestedScannerBuilder {
            scanner: NestedScanner {
                describer: Box::new(describer),
                membership: Box::new(AcceptAll),
                administrative: Box::new(SvnAdminDirectories),
                children: Box::new(FsChildren::default()),
                cancel: Box::new(NeverCancelled),
                max_depth: None,
            },
        }
    }

    /// Finds every working copy boundary beneath `root`, shallowest first
    pub fn scan(&self, root: &Path) -> ScanOutcome {
        self.scan_with_stats(root).0
    }

    /// Like [`NestedScanner::scan`], also returning per-scan counters
    pub fn scan_with_stats(&self, root: &Path) -> (ScanOutcome, ScanStatistics) {
        let start_time = Instant::now();
        let mut stats = ScanStatistics::new();
        let outcome = self.run(root, &mut stats);
        stats.duration = start_time.elapsed();

        if outcome.is_cancelled() {
            info!("Scan of {} cancelled after {} items", root.display(), stats.visited);
        } else {
            debug!(
                "Scan of {} finished: {} visited, {} boundaries",
                root.display(),
                stats.visited,
                stats.boundaries()
            );
        }
        (outcome, stats)
    }

    fn run(&self, root: &Path, stats: &mut ScanStatistics) -> ScanOutcome {
        let mut result: Vec<BoundaryNode> = Vec::new();
        let mut queue: VecDeque<(PathBuf, usize)> = VecDeque::with_capacity(ESTIMATED_QUEUE_SIZE);
        queue.push_back((root.to_path_buf(), 0));

        while let Some((item, depth)) = queue.pop_front() {
            if self.cancel.is_cancelled() {
                return ScanOutcome::Cancelled;
            }
            stats.visited += 1;

            if let Some(node) = resolve(&item, &*self.describer) {
                info!("Working copy boundary at {} ({})", item.display(), node.url);
                stats.record_boundary(&node);
                result.push(node);
                continue;
            }

            if !self.children.is_directory(&item) || self.administrative.is_administrative(&item) {
                continue;
            }
            if self.max_depth.is_some_and(|max| depth >= max) {
                debug!("Depth limit reached at {}", item.display());
                continue;
            }

            if self.cancel.is_cancelled() {
                return ScanOutcome::Cancelled;
            }
            let children = match self.children.children(&item) {
                Ok(children) => children,
                Err(e) => {
                    warn!("Cannot list {}: {}", item.display(), e);
                    stats.unreadable += 1;
                    continue;
                }
            };

            for child in children {
                if self.cancel.is_cancelled() {
                    return ScanOutcome::Cancelled;
                }
                if self.membership.accepts(root, &child) {
                    queue.push_back((child, depth + 1));
                } else {
                    debug!("Skipping {}", child.display());
                    stats.rejected += 1;
                }
            }
        }

        ScanOutcome::Completed(result)
    }
}

/// Builder for [`NestedScanner`]
pub struct NestedScannerBuilder<'a> {
    scanner: NestedScanner<'a>,
}

impl<'a> NestedScannerBuilder<'a> {
    pub fn membership(mut self, membership: impl RootMembership + Send + 'a) -> Self {
        self.scanner.membership = Box::new(membership);
        self
    }

    pub fn administrative(mut self, test: impl AdministrativeTest + Send + 'a) -> Self {
        self.scanner.administrative = Box::new(test);
        self
    }

    pub fn children(mut self, children: impl ChildEnumerator + Send + 'a) -> Self {
        self.scanner.children = Box::new(children);
        self
    }

    pub fn cancellation(mut self, cancel: impl CancellationSignal + Send + 'a) -> Self {
        self.scanner.cancel = Box::new(cancel);
        self
    }

    /// Directories at this depth below the root are resolved but not expanded
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.scanner.max_depth = max_depth;
        self
    }

    pub fn build(self) -> NestedScanner<'a> {
        self.scanner
    }
}

/// Scans `root` on the real filesystem with default collaborators
pub fn scan(root: impl AsRef<Path>, describer: impl Describer + Send) -> ScanOutcome {
    NestedScanner::builder(describer).build().scan(root.as_ref())
}
