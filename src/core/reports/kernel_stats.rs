//! `kernel-stats.md`: distinct images per kernel provenance

use crate::config::settings::Links;
use crate::core::catalog::{Board, Image, KernelProvenance};
use crate::core::markdown::{Document, Table, STATISTICS_LINK};
use crate::core::tally::Tally;
use crate::core::traverse::{CatalogVisitor, Walk};

use super::MarkdownReport;

pub struct KernelStatsReport {
    repository: String,
    tally: Tally,
}

impl KernelStatsReport {
    pub fn new(links: &Links) -> Self {
        Self {
            repository: links.repository.clone(),
            tally: Tally::new(),
        }
    }
}

impl CatalogVisitor for KernelStatsReport {
    fn image(&mut self, _vendor: &str, _board: &Board, image: &Image) {
        self.tally.record_image();
        if self.tally.first_sighting(&image.name.text()) {
            self.tally.classify(image);
        }
    }
}

impl MarkdownReport for KernelStatsReport {
    fn file_name(&self) -> &'static str {
        "kernel-stats.md"
    }

    fn document(&self, _walk: &Walk, footer: String) -> Document {
        let mut table = Table::new(["Kernel", "Qty"]);
        for provenance in KernelProvenance::ALL {
            table.push_row([
                provenance.label().to_string(),
                self.tally.kernels().get(provenance).to_string(),
            ]);
        }

        Document {
            title: "Kali ARM Kernel Statistics".to_string(),
            summary: vec![
                format!(
                    "The official [Kali ARM repository]({repo}) contains [build-scripts]({repo}) to create [**{}** unique Kali ARM images](images.html)",
                    self.tally.unique_images(),
                    repo = self.repository,
                ),
                STATISTICS_LINK.to_string(),
            ],
            table,
            footer,
        }
    }

    fn console_summary(&self, _walk: &Walk) -> Vec<String> {
        vec![format!("Kernels: {}", self.tally.unique_images())]
    }
}
