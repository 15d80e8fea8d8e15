//! Catalog traversal
//!
//! Every report walks the catalog the same way: groups in catalog order,
//! boards in group order, images in board order. [`walk`] owns that order
//! and hands each stop to a [`CatalogVisitor`]; reports only decide what to
//! accumulate.
//!
//! The walk does no I/O. Boards without any image collection are returned
//! as [`DataAnomaly`] values for the caller to report.

use std::fmt;

use super::catalog::{Board, Catalog, Image};

/// Callbacks invoked during [`walk`]
///
/// Both methods default to doing nothing, so a visitor only implements what
/// it needs.
pub trait CatalogVisitor {
    /// Called once per board, before its images
    fn board(&mut self, _vendor: &str, _board: &Board) {}

    /// Called once per image of a board carrying an image collection
    fn image(&mut self, _vendor: &str, _board: &Board, _image: &Image) {}
}

/// Non-fatal problem found while walking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataAnomaly {
    /// Board has no images-like key at all
    MissingImages { vendor: String, board: String },
}

impl fmt::Display for DataAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingImages { board, .. } => {
                write!(f, "Possible issue with: {board} (no images)")
            }
        }
    }
}

/// Counts every walk produces, whatever the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    /// One per board, images or not
    pub devices: usize,
    /// One per image visit
    pub images: usize,
    /// Boards that need attention
    pub anomalies: Vec<DataAnomaly>,
}

/// Visit every board and image once, in catalog order
pub fn walk<V: CatalogVisitor + ?Sized>(catalog: &Catalog, visitor: &mut V) -> Walk {
    let mut summary = Walk::default();

    for group in &catalog.groups {
        tracing::debug!("Walking vendor '{}' ({} boards)", group.vendor, group.boards.len());

        for board in &group.boards {
            summary.devices += 1;
            visitor.board(&group.vendor, board);

            if !board.has_image_collection() {
                summary.anomalies.push(DataAnomaly::MissingImages {
                    vendor: group.vendor.clone(),
                    board: board.name.text(),
                });
                continue;
            }

            for image in board.images() {
                summary.images += 1;
                visitor.image(&group.vendor, board, image);
            }
        }
    }

    summary
}
