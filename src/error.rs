//! Error types for kali-arm-docs
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    /// Catalog file could not be read
    #[error("Cannot open input file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Catalog text is not valid YAML
    #[error("Cannot parse input file '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// Catalog parsed but does not have the expected layout
    #[error("Unexpected layout in '{path}': {error}")]
    Shape { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Directory '{path}' does not exist and cannot be created: {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Cannot write to output file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to list a directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Release artifact errors
///
/// Every variant is fatal: a manifest built without the artifact would
/// contain fabricated sizes or digests.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Expected companion file is absent
    #[error("Missing release artifact: {path}")]
    MissingArtifact { path: PathBuf },

    /// Checksum file exists but holds no usable digest
    #[error("Checksum file '{path}' does not contain a SHA-256 digest")]
    InvalidChecksumFile { path: PathBuf },

    /// Recomputed digest disagrees with the checksum file
    #[error("Checksum mismatch for '{file}': expected {expected}, got {actual}")]
    ChecksumMismatch {
        file: String,
        expected: String,
        actual: String,
    },

    /// External tool is not installed
    #[error("Required tool '{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    /// External tool ran but its output could not be used
    #[error("Failed to inspect '{path}': {error}")]
    Inspect { path: PathBuf, error: String },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Top-level kali-arm-docs error type
#[derive(Error, Debug)]
pub enum DocsError {
    /// Load error
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Release error
    #[error("Release error: {0}")]
    Release(#[from] ReleaseError),

    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
