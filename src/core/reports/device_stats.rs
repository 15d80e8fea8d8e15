//! `device-stats.md`: raw image count per board

use crate::config::settings::Links;
use crate::core::catalog::{Board, Image};
use crate::core::markdown::{Document, Table, STATISTICS_LINK};
use crate::core::tally::Tally;
use crate::core::traverse::{CatalogVisitor, Walk};

use super::MarkdownReport;

pub struct DeviceStatsReport {
    repository: String,
    tally: Tally,
    table: Table,
}

impl DeviceStatsReport {
    pub fn new(links: &Links) -> Self {
        Self {
            repository: links.repository.clone(),
            tally: Tally::new(),
            table: Table::new(["Vendor", "[Board](devices.html)", "[Images](images.html)"]),
        }
    }
}

impl CatalogVisitor for DeviceStatsReport {
    fn board(&mut self, vendor: &str, board: &Board) {
        self.tally.record_device();
        self.table.push_row([
            vendor.to_string(),
            board.name.text(),
            board.images().len().to_string(),
        ]);
    }

    fn image(&mut self, _vendor: &str, _board: &Board, _image: &Image) {
        self.tally.record_image();
    }
}

impl MarkdownReport for DeviceStatsReport {
    fn file_name(&self) -> &'static str {
        "device-stats.md"
    }

    fn document(&self, _walk: &Walk, footer: String) -> Document {
        Document {
            title: "Kali ARM Device Statistics".to_string(),
            summary: vec![
                format!(
                    "The official [Kali ARM repository]({repo}) contains [build-scripts]({repo}) to support [**{}** Kali ARM devices](devices.html)",
                    self.tally.devices(),
                    repo = self.repository,
                ),
                STATISTICS_LINK.to_string(),
            ],
            table: self.table.clone(),
            footer,
        }
    }

    fn console_summary(&self, _walk: &Walk) -> Vec<String> {
        vec![
            format!("Devices: {}", self.tally.devices()),
            format!("Images : {}", self.tally.images()),
        ]
    }
}
