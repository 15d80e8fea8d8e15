//! `devices.md`: one row of hardware facts per board

use crate::config::settings::Links;
use crate::core::catalog::Board;
use crate::core::derive::join_natural;
use crate::core::markdown::{Document, Table, STATISTICS_LINK};
use crate::core::tally::Tally;
use crate::core::traverse::{CatalogVisitor, Walk};

use super::MarkdownReport;

const HEADERS: [&str; 15] = [
    "Vendor",
    "Board",
    "CPU",
    "CPU Cores",
    "GPU",
    "RAM",
    "RAM Size (MB)",
    "Ethernet",
    "Ethernet Speed (MB)",
    "Wi-Fi",
    "Bluetooth",
    "USB2",
    "USB3",
    "Storage",
    "Notes",
];

pub struct DevicesReport {
    repository: String,
    tally: Tally,
    table: Table,
}

impl DevicesReport {
    pub fn new(links: &Links) -> Self {
        Self {
            repository: links.repository.clone(),
            tally: Tally::new(),
            table: Table::new(HEADERS),
        }
    }
}

impl CatalogVisitor for DevicesReport {
    fn board(&mut self, vendor: &str, board: &Board) {
        self.tally.record_device();
        self.table.push_row([
            vendor.to_string(),
            board.name.text(),
            board.cpu.text(),
            board.cpu_cores.text(),
            board.gpu.text(),
            board.ram.text(),
            join_natural(board.ram_size.items()),
            board.ethernet.text(),
            board.ethernet_speed.text(),
            board.wifi.text(),
            board.bluetooth.text(),
            board.usb2.text(),
            board.usb3.text(),
            join_natural(board.storage.items()),
            board.notes.text(),
        ]);
    }
}

impl MarkdownReport for DevicesReport {
    fn file_name(&self) -> &'static str {
        "devices.md"
    }

    fn document(&self, _walk: &Walk, footer: String) -> Document {
        Document {
            title: "Kali ARM Devices".to_string(),
            summary: vec![
                format!(
                    "The official [Kali ARM repository]({}) contains build-scripts to support [**{}** Kali ARM devices](device-stats.html)",
                    self.repository,
                    self.tally.devices()
                ),
                STATISTICS_LINK.to_string(),
            ],
            table: self.table.clone(),
            footer,
        }
    }

    fn console_summary(&self, _walk: &Walk) -> Vec<String> {
        vec![format!("Devices: {}", self.tally.devices())]
    }
}
