//! `image-overview.md`: one row per distinct image with its support status
//!
//! The first board to mention a display name decides the row; later
//! sightings are skipped.

use crate::config::settings::Links;
use crate::config::urls;
use crate::core::catalog::{Board, Image, SupportTier};
use crate::core::derive::{build_script_link, link, status_columns};
use crate::core::markdown::{Document, Table, STATISTICS_LINK};
use crate::core::tally::Tally;
use crate::core::traverse::{CatalogVisitor, Walk};

use super::MarkdownReport;

pub struct ImageOverviewReport {
    repository: String,
    docs_base: String,
    blob_base: String,
    tally: Tally,
    table: Table,
}

impl ImageOverviewReport {
    pub fn new(links: &Links) -> Self {
        let headers = [
            format!("[Device Name]({}/)", links.docs_base.trim_end_matches('/')),
            format!("[Build-Script]({}/)", links.repository.trim_end_matches('/')),
            format!("[Official Image]({})", urls::GET_KALI_ARM),
            "Community Image".to_string(),
            "EOL/Retired Image".to_string(),
        ];
        Self {
            repository: links.repository.clone(),
            docs_base: links.docs_base.clone(),
            blob_base: links.blob_base.clone(),
            tally: Tally::new(),
            table: Table::new(headers),
        }
    }
}

impl CatalogVisitor for ImageOverviewReport {
    fn board(&mut self, _vendor: &str, _board: &Board) {
        self.tally.record_device();
    }

    fn image(&mut self, _vendor: &str, _board: &Board, image: &Image) {
        self.tally.record_image();
        let name = image.name.text();
        if !self.tally.first_sighting(&name) {
            tracing::debug!("Skipping repeated image '{}'", name);
            return;
        }
        self.tally.classify(image);

        let [official, community, retired] = status_columns(image.support);
        self.table.push_row([
            link(&name, &self.docs_base, &image.slug.text()),
            build_script_link(&image.build_script.text(), &self.blob_base),
            official.to_string(),
            community.to_string(),
            retired.to_string(),
        ]);
    }
}

impl MarkdownReport for ImageOverviewReport {
    fn file_name(&self) -> &'static str {
        "image-overview.md"
    }

    fn document(&self, _walk: &Walk, footer: String) -> Document {
        let support = self.tally.support();
        Document {
            title: "Kali ARM Image Overview".to_string(),
            summary: vec![
                format!(
                    "The official [Kali ARM repository]({repo}) contains [build-scripts]({repo}) to create [**{}** unique Kali ARM images](image-stats.html) for **{}** devices",
                    self.tally.unique_images(),
                    self.tally.devices(),
                    repo = self.repository,
                ),
                format!(
                    "The [next release]({}) cycle will include [**{}** Kali ARM images](image-stats.html) _([ready to download]({}))_, **{}** images which can be [built]({}), and {} retired images",
                    urls::RELEASES,
                    support.get(SupportTier::Kali),
                    urls::GET_KALI_ARM,
                    support.get(SupportTier::Community),
                    self.repository,
                    support.get(SupportTier::Eol),
                ),
                STATISTICS_LINK.to_string(),
            ],
            table: self.table.clone(),
            footer,
        }
    }

    fn console_summary(&self, _walk: &Walk) -> Vec<String> {
        let support = self.tally.support();
        vec![
            format!("Devices: {}", self.tally.devices()),
            format!("Images : {}", self.tally.unique_images()),
            format!("- Kali     : {}", support.get(SupportTier::Kali)),
            format!("- Community: {}", support.get(SupportTier::Community)),
            format!("- EOL      : {}", support.get(SupportTier::Eol)),
            format!("- Unknown  : {}", support.get(SupportTier::Unknown)),
        ]
    }
}
