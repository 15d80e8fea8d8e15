//! NetHunter kernel catalog and reports
//!
//! `kernels.yml` is a sequence of single-key mappings, one per kernel group:
//!
//! ```yaml
//! - oneplus7:
//!     model: OnePlus 7
//!     kernels:
//!       - id: oneplus7-oos-ten
//!         versions:
//!           - android: ten
//!             linux: "4.14"
//!             features: [HID, Wi-Fi injection]
//! ```
//!
//! Two reports come out of it: a table of every kernel version, and a count
//! of kernel trees per Android version (the counts are gathered by
//! [`crate::infra::kernel_dirs`]).

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::config::settings::Links;
use crate::error::LoadError;

use super::catalog::{parse_document, Scalar, ScalarList};
use super::derive::capitalize;
use super::markdown::{plain_footer, Document, Table};

/// One build of a kernel for one Android version
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KernelVersion {
    #[serde(default)]
    pub android: Scalar,
    #[serde(default)]
    pub linux: Scalar,
    #[serde(default)]
    pub kernel: Scalar,
    #[serde(default)]
    pub description: Scalar,
    #[serde(default)]
    pub features: ScalarList,
    #[serde(default)]
    pub author: Scalar,
    #[serde(default)]
    pub source: Scalar,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Kernel {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub versions: Vec<KernelVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct RawKernelGroup {
    #[serde(default)]
    model: Scalar,
    #[serde(default)]
    kernels: Vec<Kernel>,
}

/// Kernels sharing one device model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KernelGroup {
    pub name: String,
    pub model: Scalar,
    pub kernels: Vec<Kernel>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KernelCatalog {
    pub groups: Vec<KernelGroup>,
}

impl KernelCatalog {
    /// Parse catalog text, naming `origin` in any error
    pub fn from_text(text: &str, origin: &Path) -> Result<Self, LoadError> {
        let document = parse_document(text).map_err(|e| LoadError::Parse {
            path: origin.to_path_buf(),
            error: e.to_string(),
        })?;

        let raw: Option<Vec<IndexMap<String, RawKernelGroup>>> = serde_yaml::from_value(document)
            .map_err(|e| LoadError::Shape {
                path: origin.to_path_buf(),
                error: e.to_string(),
            })?;

        let groups = raw
            .unwrap_or_default()
            .into_iter()
            .flat_map(IndexMap::into_iter)
            .map(|(name, group)| KernelGroup {
                name,
                model: group.model,
                kernels: group.kernels,
            })
            .collect();

        Ok(Self { groups })
    }

    /// Number of kernel versions across every group
    pub fn version_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| &g.kernels)
            .map(|k| k.versions.len())
            .sum()
    }
}

/// `kernels.md`: one row per kernel version
pub fn kernels_document(catalog: &KernelCatalog, links: &Links, timestamp: &str) -> Document {
    let mut table = Table::new([
        "Display Name",
        "Kernel ID",
        "Android Version",
        "Linux Version",
        "Kernel Version",
        "Description",
        "Features",
        "Author",
        "Source",
    ]);

    for group in &catalog.groups {
        for kernel in &group.kernels {
            for version in &kernel.versions {
                table.push_row([
                    group.model.text(),
                    kernel.id.text(),
                    version.android.text(),
                    version.linux.text(),
                    version.kernel.text(),
                    version.description.text(),
                    version.features.items().join(", "),
                    version.author.text(),
                    format!("`{}`", version.source),
                ]);
            }
        }
    }

    Document {
        title: "Official Kali NetHunter Kernels".to_string(),
        summary: vec![format!(
            "The Kali NetHunter repository contains [**{}** kernels](nethunter-kernelstats.html)",
            table.len()
        )],
        table,
        footer: plain_footer(links, timestamp),
    }
}

/// Kernel trees found for one Android version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidVersionCount {
    pub version: String,
    pub qty: usize,
}

/// Sum over every Android version
pub fn total_kernels(counts: &[AndroidVersionCount]) -> usize {
    counts.iter().map(|c| c.qty).sum()
}

/// `kernel-stats.md`: kernel trees per Android version, in the given order
pub fn android_stats_document(
    counts: &[AndroidVersionCount],
    links: &Links,
    timestamp: &str,
) -> Document {
    let mut table = Table::new(["Android Version", "Qty"]);
    for count in counts {
        table.push_row([capitalize(&count.version), count.qty.to_string()]);
    }

    Document {
        title: "Kali NetHunter Kernel Statistics".to_string(),
        summary: vec![format!(
            "The Kali NetHunter repository contains a total of [**{}** kernels](nethunter-kernels.html)",
            total_kernels(counts)
        )],
        table,
        footer: plain_footer(links, timestamp),
    }
}
