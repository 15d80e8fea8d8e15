//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying spinners and formatted
//! status messages to the user.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Operator output settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// `-v` count
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Make these settings visible to every output helper
    pub fn apply_global(self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
    }

    /// Default tracing filter for this verbosity
    pub fn log_level(self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Whether normal output is suppressed
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Create a spinner for operations with unknown duration
///
/// Hidden when output is quiet.
pub fn create_spinner(message: &str) -> ProgressBar {
    if is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Print a plain line unless quiet
pub fn line(message: &str) {
    if !is_quiet() {
        println!("{message}");
    }
}

pub fn success(message: &str) {
    line(&format!("{} {message}", status::SUCCESS));
}

pub fn info(message: &str) {
    line(&format!("{} {message}", status::INFO));
}

pub fn warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {message}", status::WARNING);
    }
}

/// Print an error and its causes to stderr; never suppressed
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_per_verbosity() {
        assert_eq!(OutputConfig::new(false, 0).log_level(), "warn");
        assert_eq!(OutputConfig::new(false, 1).log_level(), "info");
        assert_eq!(OutputConfig::new(false, 2).log_level(), "debug");
        assert_eq!(OutputConfig::new(false, 7).log_level(), "debug");
    }

    #[test]
    fn test_status_symbols_defined() {
        assert_eq!(status::SUCCESS, "✓");
        assert_eq!(status::ERROR, "✗");
        assert_eq!(status::WARNING, "⚠");
        assert_eq!(status::INFO, "ℹ");
    }

    #[test]
    fn test_spinner_finishes() {
        let pb = create_spinner("Inspecting artifacts");
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
