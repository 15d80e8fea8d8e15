//! NetHunter kernel tree counting
//!
//! Each Android version has a directory under the NetHunter root holding one
//! sub-directory per kernel.

use std::path::Path;
use walkdir::WalkDir;

use crate::core::kernels::AndroidVersionCount;
use crate::error::FilesystemError;

/// Count the immediate sub-directories of `path`
pub fn count_subdirs(path: &Path) -> Result<usize, FilesystemError> {
    if !path.is_dir() {
        return Err(FilesystemError::ReadDir {
            path: path.to_path_buf(),
            error: "directory not found".to_string(),
        });
    }

    let entries = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            count += 1;
        }
    }
    Ok(count)
}

/// Count kernel trees for each Android version, in the given order
///
/// A missing version directory is an error.
pub fn count_versions(
    root: &Path,
    versions: &[&str],
) -> Result<Vec<AndroidVersionCount>, FilesystemError> {
    versions
        .iter()
        .map(|version| {
            let dir = root.join(version);
            let qty = count_subdirs(&dir)?;
            tracing::debug!("{}: {} kernels", dir.display(), qty);
            Ok(AndroidVersionCount {
                version: (*version).to_string(),
                qty,
            })
        })
        .collect()
}
