//! Command implementations behind the `nested-roots` binary

pub mod scan;

pub use scan::{handle_scan_command, ScanArgs, ScanExit};
