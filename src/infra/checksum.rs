//! SHA-256 checksum files and verification
//!
//! Release images ship with `sha256sum`-style companion files:
//! `<digest>  <file name>` (text mode) or `<digest> *<file name>` (binary
//! mode). Only the first digest is used.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::ReleaseError;

const DIGEST_LEN: usize = 64;

/// Extract the digest from `sha256sum` output
///
/// Returns the lowercase digest, or `None` when the first word of the first
/// non-empty line is not 64 hex characters.
pub fn parse_checksum(content: &str) -> Option<String> {
    let line = content.lines().map(str::trim).find(|l| !l.is_empty())?;
    let digest = line.split_whitespace().next()?;
    let digest = digest.strip_prefix('\\').unwrap_or(digest);

    if digest.len() == DIGEST_LEN && digest.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(digest.to_ascii_lowercase())
    } else {
        None
    }
}

/// Read and parse a checksum file
pub fn read_checksum_file(path: &Path) -> Result<String, ReleaseError> {
    if !path.is_file() {
        return Err(ReleaseError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|_| ReleaseError::InvalidChecksumFile {
        path: path.to_path_buf(),
    })?;

    parse_checksum(&content).ok_or_else(|| ReleaseError::InvalidChecksumFile {
        path: path.to_path_buf(),
    })
}

/// Compute SHA256 checksum of data
pub fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute SHA256 checksum of a file, streaming its content
pub fn file_checksum(path: &Path) -> Result<String, ReleaseError> {
    let file = File::open(path).map_err(|e| ReleaseError::Inspect {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        let read = reader.read(&mut buffer).map_err(|e| ReleaseError::Inspect {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Recompute a file's digest and compare it with the expected one
pub fn verify_checksum(path: &Path, expected: &str) -> Result<(), ReleaseError> {
    let actual = file_checksum(path)?;
    if actual == expected.to_lowercase() {
        tracing::debug!("Checksum verified for {}", path.display());
        Ok(())
    } else {
        Err(ReleaseError::ChecksumMismatch {
            file: path.display().to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}
