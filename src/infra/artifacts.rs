//! Built image inspection
//!
//! For a release file name `<name>`, the output directory holds:
//!
//! - `<name>.img.xz`: the compressed image
//! - `<name>.img.sha256sum`: digest of the uncompressed image
//! - `<name>.img.xz.sha256sum`: digest of the compressed image

use std::path::Path;

use crate::core::release::ArtifactInfo;
use crate::error::ReleaseError;

use super::{checksum, xz};

/// Gather sizes and digests for one release image
///
/// With `verify`, the compressed image is hashed and compared against its
/// checksum file.
pub fn inspect(dir: &Path, filename: &str, verify: bool) -> Result<ArtifactInfo, ReleaseError> {
    let image = dir.join(format!("{filename}.img.xz"));
    let extract_sum = dir.join(format!("{filename}.img.sha256sum"));
    let download_sum = dir.join(format!("{filename}.img.xz.sha256sum"));

    let metadata = std::fs::metadata(&image).map_err(|_| ReleaseError::MissingArtifact {
        path: image.clone(),
    })?;

    let extract_sha256 = checksum::read_checksum_file(&extract_sum)?;
    let image_download_sha256 = checksum::read_checksum_file(&download_sum)?;

    if verify {
        checksum::verify_checksum(&image, &image_download_sha256)?;
    }

    let sizes = xz::list(&image)?;

    Ok(ArtifactInfo {
        extract_size: sizes.uncompressed,
        extract_sha256,
        image_download_size: metadata.len(),
        image_download_sha256,
    })
}
