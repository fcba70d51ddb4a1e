//! Spinner management for long-running scans

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::config::{SCANNING_MESSAGE, SPINNER_TEMPLATE, SPINNER_TICK_MS};

/// Creates the spinner style used while scanning
pub(crate) fn create_spinner_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?)
}

/// Creates a ticking spinner on stderr, or a hidden one when `enabled` is false
pub fn create_scan_spinner(enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style()?);
    spinner.set_message(SCANNING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    Ok(spinner)
}
