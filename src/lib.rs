//! kali-arm-docs - Kali ARM documentation generator
//!
//! This library renders the Kali ARM device catalog (`devices.yml`) into
//! Markdown reports for the documentation site and JSON manifests for the
//! release tooling, plus the NetHunter kernel reports (`kernels.yml`).
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
