//! Statistics tracking for nested working copy scans

use std::time::Duration;

use super::config::{ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH, PATH_DISPLAY_WIDTH};
use super::node::BoundaryNode;
use crate::utils::shorten_path;

/// Counters collected during one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Items taken off the work queue and resolved
    pub visited: u64,
    /// Boundaries resolved with real URLs
    pub resolved: u64,
    /// Boundaries that carry an error
    pub failed: u64,
    /// Children dropped by the membership predicate
    pub rejected: u64,
    /// Directories whose children could not be listed
    pub unreadable: u64,
    pub duration: Duration,
}

impl ScanStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_boundary(&mut self, node: &BoundaryNode) {
        if node.is_error() {
            self.failed += 1;
        } else {
            self.resolved += 1;
        }
    }

    pub fn boundaries(&self) -> u64 {
        self.resolved + self.failed
    }

    /// One-line summary of the scan
    pub fn generate_summary(&self) -> String {
        let duration_secs = self.duration.as_secs_f64();
        let mut summary = format!(
            "✅ Completed in {:.1}s • {} visited • {} working copies",
            duration_secs, self.visited, self.resolved
        );
        if self.failed > 0 {
            summary.push_str(&format!(" • {} failed", self.failed));
        }
        if self.unreadable > 0 {
            summary.push_str(&format!(" • {} unreadable", self.unreadable));
        }
        summary
    }

    /// Detailed listing of nodes that failed to resolve
    pub fn generate_detailed_summary(&self, nodes: &[BoundaryNode]) -> String {
        let failed: Vec<_> = nodes.iter().filter(|n| n.is_error()).collect();
        if failed.is_empty() {
            return String::new();
        }

        let mut lines = vec![format!("🔴 FAILED ({})", failed.len())];
        for (i, node) in failed.iter().enumerate() {
            let tree_char = if i == failed.len() - 1 { "└─" } else { "├─" };
            let path = shorten_path(&node.directory.to_string_lossy(), PATH_DISPLAY_WIDTH);
            let error = node
                .error
                .as_ref()
                .map(|e| clean_error_message(&e.to_string()))
                .unwrap_or_default();
            lines.push(format!(
                "   {} {:width$} # {}",
                tree_char,
                path,
                error,
                width = PATH_DISPLAY_WIDTH
            ));
        }
        lines.join("\n")
    }
}

/// Collapses whitespace and truncates long backend messages for display
pub fn clean_error_message(error: &str) -> String {
    let cleaned = error.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        let truncated: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{truncated}...")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::DescribeError;

    #[test]
    fn test_record_boundary() {
        let mut stats = ScanStatistics::new();
        stats.record_boundary(&BoundaryNode::resolved("/a", "svn://h/a", "svn://h"));
        stats.record_boundary(&BoundaryNode::failed("/b", DescribeError::io("boom")));

        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.boundaries(), 2);
    }

    #[test]
    fn test_summary_mentions_failures_only_when_present() {
        let mut stats = ScanStatistics::new();
        stats.visited = 10;
        stats.resolved = 2;
        let summary = stats.generate_summary();
        assert!(summary.contains("10 visited"));
        assert!(summary.contains("2 working copies"));
        assert!(!summary.contains("failed"));

        stats.failed = 1;
        assert!(stats.generate_summary().contains("1 failed"));
    }

    #[test]
    fn test_detailed_summary_lists_failed_nodes() {
        let nodes = vec![
            BoundaryNode::resolved("/a", "svn://h/a", "svn://h"),
            BoundaryNode::failed("/b", DescribeError::io("svn\n  exploded")),
        ];
        let detail = ScanStatistics::new().generate_detailed_summary(&nodes);

        assert!(detail.starts_with("🔴 FAILED (1)"));
        assert!(detail.contains("└─"));
        assert!(detail.contains("svn exploded"));
        assert!(!detail.contains("/a "));
    }

    #[test]
    fn test_clean_error_message_truncates() {
        let long = "x".repeat(100);
        let cleaned = clean_error_message(&long);
        assert_eq!(cleaned.len(), ERROR_MESSAGE_TRUNCATE_LENGTH + 3);
        assert!(cleaned.ends_with("..."));
    }
}
