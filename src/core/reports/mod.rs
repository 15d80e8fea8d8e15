//! Markdown report strategies
//!
//! Each report is a [`CatalogVisitor`] that accumulates what it needs during
//! the shared [`walk`], then turns its state into a [`Document`]. Adding a
//! report means adding a visitor here and a [`ReportKind`] variant; the walk
//! and the renderer are shared.
//!
//! De-duplication scope per report:
//!
//! | Report | Rows | De-duplication |
//! |---|---|---|
//! | [`devices`] | one per board | none |
//! | [`device_stats`] | one per board | none |
//! | [`images`] | one per image visit | counts only, global by name |
//! | [`image_stats`] | one per `name (arch)` label | global by label |
//! | [`image_overview`] | one per display name | global by name, first sighting wins |
//! | [`kernel_stats`] | one per provenance | global by name, first sighting wins |

pub mod device_stats;
pub mod devices;
pub mod image_overview;
pub mod image_stats;
pub mod images;
pub mod kernel_stats;

use crate::config::settings::Links;

use super::catalog::Catalog;
use super::markdown::{catalog_footer, Document};
use super::traverse::{walk, CatalogVisitor, Walk};

/// A report built from one walk of the device catalog
pub trait MarkdownReport: CatalogVisitor {
    /// Output file name, relative to the output directory
    fn file_name(&self) -> &'static str;

    /// Page to write once the walk is complete
    fn document(&self, walk: &Walk, footer: String) -> Document;

    /// Counter lines printed to the operator after writing
    fn console_summary(&self, walk: &Walk) -> Vec<String>;
}

/// The Markdown reports generated from `devices.yml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Devices,
    DeviceStats,
    Images,
    ImageStats,
    ImageOverview,
    KernelStats,
}

impl ReportKind {
    /// Every report, in the order `all` generates them
    pub const ALL: [Self; 6] = [
        Self::Devices,
        Self::DeviceStats,
        Self::Images,
        Self::ImageStats,
        Self::ImageOverview,
        Self::KernelStats,
    ];

    /// Fresh report state
    pub fn build(self, links: &Links) -> Box<dyn MarkdownReport> {
        match self {
            Self::Devices => Box::new(devices::DevicesReport::new(links)),
            Self::DeviceStats => Box::new(device_stats::DeviceStatsReport::new(links)),
            Self::Images => Box::new(images::ImagesReport::new(links)),
            Self::ImageStats => Box::new(image_stats::ImageStatsReport::new(links)),
            Self::ImageOverview => Box::new(image_overview::ImageOverviewReport::new(links)),
            Self::KernelStats => Box::new(kernel_stats::KernelStatsReport::new(links)),
        }
    }
}

/// Result of generating one report
#[derive(Debug, Clone)]
pub struct Rendered {
    pub file_name: &'static str,
    pub content: String,
    pub console: Vec<String>,
    pub walk: Walk,
}

/// Walk the catalog with `report` and render the page
pub fn generate(
    catalog: &Catalog,
    report: &mut dyn MarkdownReport,
    links: &Links,
    timestamp: &str,
) -> Rendered {
    let summary = walk(catalog, report);
    tracing::debug!(
        "{}: {} devices, {} image visits",
        report.file_name(),
        summary.devices,
        summary.images
    );

    let document = report.document(&summary, catalog_footer(links, timestamp));

    Rendered {
        file_name: report.file_name(),
        content: document.render(),
        console: report.console_summary(&summary),
        walk: summary,
    }
}

/// Render a report of the given kind
pub fn render(kind: ReportKind, catalog: &Catalog, links: &Links, timestamp: &str) -> Rendered {
    let mut report = kind.build(links);
    generate(catalog, report.as_mut(), links, timestamp)
}
