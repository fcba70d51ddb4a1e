//! Public API for the core module.
//!
//! This module provides the stable public API for the scan core:
//! - Boundary records and scan outcomes
//! - Node resolution and the describer contract
//! - The breadth-first scanner and its collaborators
//! - Configuration loading and statistics
//!
//! Internal implementation details are not exposed through this API.

// Core types
pub use super::node::{BoundaryNode, ScanError, ScanOutcome};
pub use super::resolver::{
    placeholder_url, resolve, DescribeError, DescribeErrorKind, Describer, Description,
};
pub use super::stats::{clean_error_message, ScanStatistics};

// Scanning
pub use super::cancel::{CancelFlag, CancellationSignal, NeverCancelled};
pub use super::children::{ChildEnumerator, FsChildren};
pub use super::membership::{AcceptAll, ExcludeMembership, RootMembership};
pub use super::scanner::{scan, AdministrativeTest, NestedScanner, NestedScannerBuilder};

// Configuration
pub use super::config::{global_config_path, ConfigError, ScanConfig};
pub use super::config::{DEFAULT_SKIP_DIRECTORIES, ROOT_CONFIG_FILE_NAME};

// User-facing messages
pub use super::config::{CANCELLED_MESSAGE, NO_BOUNDARIES_MESSAGE};

// Progress
pub use super::progress::create_scan_spinner;

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};
