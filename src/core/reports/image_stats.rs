//! `image-stats.md`: sorted unique `name (architecture)` labels

use std::collections::BTreeSet;

use crate::config::settings::Links;
use crate::core::catalog::{Board, Image};
use crate::core::markdown::{Document, Table, STATISTICS_LINK};
use crate::core::traverse::{CatalogVisitor, Walk};

use super::MarkdownReport;

pub struct ImageStatsReport {
    repository: String,
    labels: BTreeSet<String>,
}

impl ImageStatsReport {
    pub fn new(links: &Links) -> Self {
        Self {
            repository: links.repository.clone(),
            labels: BTreeSet::new(),
        }
    }
}

impl CatalogVisitor for ImageStatsReport {
    fn image(&mut self, _vendor: &str, _board: &Board, image: &Image) {
        self.labels
            .insert(format!("{} ({})", image.name, image.architecture));
    }
}

impl MarkdownReport for ImageStatsReport {
    fn file_name(&self) -> &'static str {
        "image-stats.md"
    }

    fn document(&self, _walk: &Walk, footer: String) -> Document {
        let mut table = Table::new(["[Image Name](images.html) (Architecture)"]);
        for label in &self.labels {
            table.push_row([label.as_str()]);
        }

        Document {
            title: "Kali ARM Image Statistics".to_string(),
            summary: vec![
                format!(
                    "The official [Kali ARM repository]({repo}) contains [build-scripts]({repo}) to create [**{}** unique Kali ARM images](images.html)",
                    self.labels.len(),
                    repo = self.repository,
                ),
                STATISTICS_LINK.to_string(),
            ],
            table,
            footer,
        }
    }

    fn console_summary(&self, _walk: &Walk) -> Vec<String> {
        vec![format!("Images: {}", self.labels.len())]
    }
}
