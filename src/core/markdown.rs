//! Markdown rendering
//!
//! Every report is a [`Document`]: YAML front matter, a bullet summary, one
//! pipe table and an italic attribution footer. Rendering is pure; the
//! generation timestamp is part of the footer text the caller supplies.

use std::fmt::Write as _;

use crate::config::settings::Links;

/// Bullet linking back to the statistics landing page
pub const STATISTICS_LINK: &str = "[Kali ARM Statistics](index.html)";

/// A pipe-delimited table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column headers
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; cells are written as given
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of body rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header line, dash separator sized to each header, then one line per row
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push('|');
        for header in &self.headers {
            let _ = write!(out, " {header} |");
        }
        out.push('\n');

        out.push('|');
        for header in &self.headers {
            out.push_str(&"-".repeat(header.chars().count() + 2));
            out.push('|');
        }
        out.push('\n');

        for row in &self.rows {
            out.push('|');
            for cell in row {
                let _ = write!(out, " {cell} |");
            }
            out.push('\n');
        }

        out
    }
}

/// A complete report page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    /// Bullet lines, without the leading `- `
    pub summary: Vec<String>,
    pub table: Table,
    /// Footer text, without the surrounding underscores
    pub footer: String,
}

impl Document {
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = write!(out, "---\ntitle: {}\n---\n\n", self.title);

        for line in &self.summary {
            let _ = writeln!(out, "- {line}");
        }
        if !self.summary.is_empty() {
            out.push('\n');
        }

        out.push_str(&self.table.render());
        let _ = write!(out, "\n_{}_\n", self.footer);

        out
    }
}

/// Attribution for reports generated from the device catalog
pub fn catalog_footer(links: &Links, timestamp: &str) -> String {
    format!(
        "This table was [generated automatically]({}/devices.yml) on {timestamp} from the [Kali ARM GitLab repository]({})",
        links.blob_base.trim_end_matches('/'),
        links.repository,
    )
}

/// Attribution for reports that do not come from the device catalog
pub fn plain_footer(links: &Links, timestamp: &str) -> String {
    format!(
        "This table was generated automatically on {timestamp} from the [Kali ARM GitLab repository]({})",
        links.repository,
    )
}
