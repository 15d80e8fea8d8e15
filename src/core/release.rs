//! Release manifests
//!
//! Builds the JSON documents consumed by the quarterly release tooling:
//!
//! - `manifest.json`: images published by Kali, grouped by vendor
//! - `rpi-imager.json` (pre-release): Raspberry Pi images, grouped by vendor
//! - `rpi-imager.json` (post-release): published Raspberry Pi images in the
//!   upstream imager's `os_list` shape, with sizes and digests taken from the
//!   built artifacts
//!
//! Images are de-duplicated by display name within each vendor name. Vendor
//! groups that repeat in the catalog share one bucket and one JSON key.
//!
//! Artifact inspection is I/O and lives in [`crate::infra`]; [`os_list`]
//! takes it as a callback.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

use crate::config::{defaults, urls};
use crate::error::ReleaseError;

use super::catalog::{Board, Catalog, Image, Scalar, SupportTier};
use super::traverse::{walk, CatalogVisitor, Walk};

/// Which images a manifest includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Support tier `kali`
    Published,
    /// File stem starting with `raspberry`, any tier
    RaspberryPi,
    /// Both of the above
    PublishedRaspberryPi,
}

impl Selection {
    pub fn includes(self, image: &Image) -> bool {
        let published = image.support == SupportTier::Kali;
        let raspberry = image
            .file_stem
            .text()
            .starts_with(defaults::RASPBERRY_PI_PREFIX);
        match self {
            Self::Published => published,
            Self::RaspberryPi => raspberry,
            Self::PublishedRaspberryPi => published && raspberry,
        }
    }
}

/// Released file name without extension (`kali-linux-2024.1-raspberry-pi-arm64`)
pub fn release_filename(release: &str, file_stem: &str) -> String {
    format!("{}-{release}-{file_stem}", defaults::RELEASE_FILE_PREFIX)
}

/// Images picked for a release, grouped by vendor in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Selected {
    pub vendors: IndexMap<String, Vec<Image>>,
    pub walk: Walk,
}

impl Selected {
    /// Number of images kept after de-duplication
    pub fn count(&self) -> usize {
        self.vendors.values().map(Vec::len).sum()
    }

    /// Every kept image in vendor order
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.vendors.values().flatten()
    }
}

struct Collector {
    selection: Selection,
    seen: HashSet<(String, String)>,
    vendors: IndexMap<String, Vec<Image>>,
}

impl CatalogVisitor for Collector {
    fn image(&mut self, vendor: &str, _board: &Board, image: &Image) {
        if !self.selection.includes(image) {
            return;
        }
        let key = (vendor.to_string(), image.name.text());
        if !self.seen.insert(key) {
            return;
        }
        self.vendors
            .entry(vendor.to_string())
            .or_default()
            .push(image.clone());
    }
}

/// Walk the catalog and keep the images `selection` asks for
pub fn select(catalog: &Catalog, selection: Selection) -> Selected {
    let mut collector = Collector {
        selection,
        seen: HashSet::new(),
        vendors: IndexMap::new(),
    };
    let summary = walk(catalog, &mut collector);

    Selected {
        vendors: collector.vendors,
        walk: summary,
    }
}

/// One `manifest.json` record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestEntry {
    pub name: String,
    pub filename: String,
    pub preferred: Scalar,
    pub slug: String,
}

/// `manifest.json` body: vendor name → records
pub fn manifest(selected: &Selected, release: &str) -> IndexMap<String, Vec<ManifestEntry>> {
    selected
        .vendors
        .iter()
        .map(|(vendor, images)| {
            let entries = images
                .iter()
                .map(|image| ManifestEntry {
                    name: image.name.text(),
                    filename: release_filename(release, &image.file_stem.text()),
                    preferred: if image.preferred_image.is_empty() {
                        Scalar::from("")
                    } else {
                        image.preferred_image.clone()
                    },
                    slug: image.slug.text(),
                })
                .collect();
            (vendor.clone(), entries)
        })
        .collect()
}

/// One pre-release `rpi-imager.json` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagerEntry {
    pub name: String,
    pub filename: String,
}

/// Pre-release `rpi-imager.json` body: vendor name → records
pub fn imager_manifest(selected: &Selected, release: &str) -> IndexMap<String, Vec<ImagerEntry>> {
    selected
        .vendors
        .iter()
        .map(|(vendor, images)| {
            let entries = images
                .iter()
                .map(|image| ImagerEntry {
                    name: image.name.text(),
                    filename: release_filename(release, &image.file_stem.text()),
                })
                .collect();
            (vendor.clone(), entries)
        })
        .collect()
}

/// Sizes and digests of one built image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactInfo {
    /// Uncompressed `.img` size in bytes
    pub extract_size: u64,
    pub extract_sha256: String,
    /// Compressed `.img.xz` size in bytes
    pub image_download_size: u64,
    pub image_download_sha256: String,
}

/// One entry of the imager's `os_list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsListEntry {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub release_date: String,
    pub extract_size: u64,
    pub extract_sha256: String,
    pub image_download_size: u64,
    pub image_download_sha256: String,
    pub website: String,
}

/// Post-release `rpi-imager.json` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OsList {
    pub os_list: Vec<OsListEntry>,
}

/// Build the imager `os_list`, asking `inspect` for each image's artifacts
///
/// `inspect` receives the release file name without extension. The first
/// inspection error aborts the whole list.
pub fn os_list<F>(
    selected: &Selected,
    release: &str,
    release_date: &str,
    mut inspect: F,
) -> Result<OsList, ReleaseError>
where
    F: FnMut(&str) -> Result<ArtifactInfo, ReleaseError>,
{
    let mut entries = Vec::with_capacity(selected.count());

    for image in selected.images() {
        let name = image.name.text();
        let filename = release_filename(release, &image.file_stem.text());
        let info = inspect(&filename)?;

        entries.push(OsListEntry {
            description: format!("Kali Linux image for the {name}"),
            url: format!(
                "{}/kali-{release}/{filename}.img.xz",
                urls::IMAGE_DOWNLOAD_BASE
            ),
            icon: urls::IMAGER_ICON.to_string(),
            release_date: release_date.to_string(),
            extract_size: info.extract_size,
            extract_sha256: info.extract_sha256,
            image_download_size: info.image_download_size,
            image_download_sha256: info.image_download_sha256,
            website: urls::WEBSITE.to_string(),
            name,
        });
    }

    Ok(OsList { os_list: entries })
}
