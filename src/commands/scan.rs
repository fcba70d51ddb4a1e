//! Nested working copy scan command implementation
//!
//! Resolves the scan root and configuration, runs the blocking scan on the
//! tokio blocking pool, wires Ctrl-C to the cancellation flag and renders the
//! result as text or JSON.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::{
    create_scan_spinner, set_terminal_title, set_terminal_title_and_flush, BoundaryNode,
    CancelFlag, ExcludeMembership, NestedScanner, ScanConfig, ScanOutcome, ScanStatistics,
    CANCELLED_MESSAGE, NO_BOUNDARIES_MESSAGE,
};
use crate::svn::SvnCliDescriber;
use crate::utils::display_relative;

const PATH_COLUMN_WIDTH: usize = 30;
const SEPARATOR_WIDTH: usize = 70;

/// Command line options for a scan
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub root: PathBuf,
    pub json: bool,
    pub max_depth: Option<usize>,
    pub exclude: Vec<String>,
    pub svn_binary: Option<String>,
    pub progress: bool,
}

/// How the scan ended, mapped to a process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanExit {
    Clean,
    WithErrors,
    Cancelled,
}

impl ScanExit {
    pub fn code(self) -> i32 {
        match self {
            ScanExit::Clean => 0,
            ScanExit::WithErrors => 1,
            ScanExit::Cancelled => 130,
        }
    }
}

/// Merges command line options over the loaded configuration
pub fn apply_args(mut config: ScanConfig, args: &ScanArgs) -> ScanConfig {
    config.exclude.extend(args.exclude.iter().cloned());
    if args.max_depth.is_some() {
        config.max_depth = args.max_depth;
    }
    if let Some(svn) = &args.svn_binary {
        config.svn_binary = svn.clone();
    }
    config
}

/// Main handler for the scan command
pub async fn handle_scan_command(args: ScanArgs) -> Result<ScanExit> {
    set_terminal_title("🔍 nested-roots");

    let root = std::fs::canonicalize(&args.root)
        .with_context(|| format!("Cannot access scan root {}", args.root.display()))?;
    let config = apply_args(
        ScanConfig::load(&root).context("Failed to load configuration")?,
        &args,
    );
    tracing::debug!("Effective configuration: {:?}", config);

    let describer = SvnCliDescriber::new(&config.svn_binary);
    if !describer.is_available() {
        anyhow::bail!(
            "Subversion client '{}' could not be run. Install svn or set --svn / NESTED_ROOTS_SVN.",
            config.svn_binary
        );
    }
    let membership = ExcludeMembership::new(&root, &config.skip_directories, &config.exclude)
        .context("Invalid exclude configuration")?;

    let cancel = CancelFlag::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let spinner = create_scan_spinner(args.progress && !args.json)?;
    let scan_root = root.clone();
    let max_depth = config.max_depth;
    let (outcome, stats) = tokio::task::spawn_blocking(move || {
        NestedScanner::builder(describer)
            .membership(membership)
            .cancellation(cancel)
            .max_depth(max_depth)
            .build()
            .scan_with_stats(&scan_root)
    })
    .await
    .context("Scan task failed")?;
    spinner.finish_and_clear();
    ctrl_c.abort();

    let nodes = match outcome {
        ScanOutcome::Completed(nodes) => nodes,
        ScanOutcome::Cancelled => {
            eprintln!("{CANCELLED_MESSAGE}");
            set_terminal_title_and_flush("⛔ nested-roots");
            return Ok(ScanExit::Cancelled);
        }
    };

    if args.json {
        println!("{}", render_json(&root, &nodes, &stats)?);
    } else {
        println!("{}", render_text(&root, &nodes, &stats));
    }
    set_terminal_title_and_flush("✅ nested-roots");

    if nodes.iter().any(BoundaryNode::is_error) {
        Ok(ScanExit::WithErrors)
    } else {
        Ok(ScanExit::Clean)
    }
}

/// Human readable listing, one line per boundary, followed by the summary
pub fn render_text(root: &Path, nodes: &[BoundaryNode], stats: &ScanStatistics) -> String {
    if nodes.is_empty() {
        return format!("{NO_BOUNDARIES_MESSAGE}\n{}", stats.generate_summary());
    }

    let mut lines = Vec::with_capacity(nodes.len() + 4);
    for node in nodes {
        let path = display_relative(root, &node.directory);
        match &node.error {
            Some(error) => lines.push(format!(
                "🔴 {:width$} {}",
                path,
                crate::core::clean_error_message(&error.to_string()),
                width = PATH_COLUMN_WIDTH
            )),
            None => lines.push(format!(
                "🟢 {:width$} {} (root: {})",
                path,
                node.url,
                node.repository_root_url,
                width = PATH_COLUMN_WIDTH
            )),
        }
    }

    lines.push(String::new());
    lines.push(stats.generate_summary());

    let detailed = stats.generate_detailed_summary(nodes);
    if !detailed.is_empty() {
        lines.push("━".repeat(SEPARATOR_WIDTH));
        lines.push(detailed);
        lines.push("━".repeat(SEPARATOR_WIDTH));
    }
    lines.join("\n")
}

/// Machine readable report
pub fn render_json(root: &Path, nodes: &[BoundaryNode], stats: &ScanStatistics) -> Result<String> {
    let boundaries = serde_json::to_value(nodes).context("Failed to serialize boundaries")?;
    let json_output = serde_json::json!({
        "root": root.to_string_lossy(),
        "boundaries": boundaries,
        "summary": {
            "visited": stats.visited,
            "resolved": stats.resolved,
            "failed": stats.failed,
            "rejected": stats.rejected,
            "unreadable": stats.unreadable,
            "scan_duration_seconds": stats.duration.as_secs_f64()
        }
    });
    Ok(serde_json::to_string_pretty(&json_output)?)
}
