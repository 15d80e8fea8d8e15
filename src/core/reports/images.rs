//! `images.md`: one row per image visit
//!
//! Rows are not de-duplicated, so an image shared by several boards shows up
//! once per board. The summary counts distinct display names.

use crate::config::settings::Links;
use crate::config::urls;
use crate::core::catalog::{Board, Image, SupportTier};
use crate::core::derive::link;
use crate::core::markdown::{Document, Table, STATISTICS_LINK};
use crate::core::tally::Tally;
use crate::core::traverse::{CatalogVisitor, Walk};

use super::MarkdownReport;

pub struct ImagesReport {
    repository: String,
    docs_base: String,
    /// Every image
    all: Tally,
    /// Images published by Kali
    released: Tally,
    table: Table,
}

impl ImagesReport {
    pub fn new(links: &Links) -> Self {
        let docs = format!("[Documentation]({}/)", links.docs_base.trim_end_matches('/'));
        Self {
            repository: links.repository.clone(),
            docs_base: links.docs_base.clone(),
            all: Tally::new(),
            released: Tally::new(),
            table: Table::new([
                "Image Name",
                "Filename",
                "Architecture",
                "Preferred",
                "Support",
                docs.as_str(),
                "[Kernel](kernel-stats.html)",
                "Kernel Version",
                "Notes",
            ]),
        }
    }
}

impl CatalogVisitor for ImagesReport {
    fn board(&mut self, _vendor: &str, _board: &Board) {
        self.all.record_device();
    }

    fn image(&mut self, _vendor: &str, _board: &Board, image: &Image) {
        let name = image.name.text();
        self.all.record_image();
        self.all.first_sighting(&name);
        if image.support == SupportTier::Kali {
            self.released.record_image();
            self.released.first_sighting(&name);
        }

        let slug = image.slug.text();
        self.table.push_row([
            name,
            image.file_stem.text(),
            image.architecture.text(),
            image.preferred_image.text(),
            image.support_text.text(),
            link(&slug, &self.docs_base, &slug),
            image.kernel_text.text(),
            image.kernel_version.text(),
            image.image_notes.text(),
        ]);
    }
}

impl MarkdownReport for ImagesReport {
    fn file_name(&self) -> &'static str {
        "images.md"
    }

    fn document(&self, _walk: &Walk, footer: String) -> Document {
        Document {
            title: "Kali ARM Images".to_string(),
            summary: vec![
                format!(
                    "The official [Kali ARM repository]({repo}) contains [build-scripts]({repo}) to create [**{}** unique Kali ARM images](image-stats.html) for **{}** devices",
                    self.all.unique_images(),
                    self.all.devices(),
                    repo = self.repository,
                ),
                format!(
                    "The [next release]({}) cycle will include [**{}** Kali ARM images](image-stats.html) _([ready to download]({}))_",
                    urls::RELEASES,
                    self.released.unique_images(),
                    urls::GET_KALI_ARM,
                ),
                STATISTICS_LINK.to_string(),
            ],
            table: self.table.clone(),
            footer,
        }
    }

    fn console_summary(&self, _walk: &Walk) -> Vec<String> {
        vec![
            format!("Devices        : {}", self.all.devices()),
            format!("Images         : {}", self.all.unique_images()),
            format!("Images Released: {}", self.released.unique_images()),
        ]
    }
}
