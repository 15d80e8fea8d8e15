//! `xz` container inspection
//!
//! The uncompressed size of a release image is read from the `.xz` index
//! with `xz --robot --list`, so images never have to be decompressed.

use std::path::Path;
use std::process::Command;

use crate::error::ReleaseError;

const XZ: &str = "xz";

/// Sizes recorded in an `.xz` file's index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XzSizes {
    pub compressed: u64,
    pub uncompressed: u64,
}

/// Check if xz is installed on the system
pub fn is_xz_available() -> bool {
    which::which(XZ).is_ok()
}

/// Parse `xz --robot --list` output
///
/// Sizes come from the tab-separated `file` line: column 4 is the
/// compressed size and column 5 the uncompressed size.
pub fn parse_robot_list(output: &str) -> Option<XzSizes> {
    let line = output.lines().find(|l| l.starts_with("file\t"))?;
    let columns: Vec<&str> = line.split('\t').collect();

    let compressed = columns.get(3)?.trim().parse().ok()?;
    let uncompressed = columns.get(4)?.trim().parse().ok()?;

    Some(XzSizes {
        compressed,
        uncompressed,
    })
}

/// Read the sizes of an `.xz` file
pub fn list(path: &Path) -> Result<XzSizes, ReleaseError> {
    if !path.is_file() {
        return Err(ReleaseError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }
    if !is_xz_available() {
        return Err(ReleaseError::ToolNotFound {
            tool: XZ.to_string(),
        });
    }

    let output = Command::new(XZ)
        .args(["--robot", "--list"])
        .arg(path)
        .output()
        .map_err(|e| ReleaseError::Inspect {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReleaseError::Inspect {
            path: path.to_path_buf(),
            error: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let sizes = parse_robot_list(&stdout).ok_or_else(|| ReleaseError::Inspect {
        path: path.to_path_buf(),
        error: "unexpected `xz --robot --list` output".to_string(),
    })?;

    tracing::debug!(
        "{}: {} bytes compressed, {} bytes uncompressed",
        path.display(),
        sizes.compressed,
        sizes.uncompressed
    );
    Ok(sizes)
}
