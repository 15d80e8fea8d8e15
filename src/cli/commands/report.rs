//! Markdown report commands
//!
//! Implements `kali-arm-docs devices`, `images`, ... and `all`.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output;
use crate::config::settings::Settings;
use crate::core::catalog::Catalog;
use crate::core::reports::{self, Rendered, ReportKind};
use crate::core::traverse::Walk;
use crate::error::DocsError;
use crate::infra::filesystem;

/// Read and parse the device catalog
pub fn load_catalog(path: &Path) -> Result<Catalog, DocsError> {
    let text = filesystem::read_catalog(path)?;
    let catalog = Catalog::from_text(&text, path)?;
    tracing::info!(
        "Loaded {} vendor groups, {} boards from {}",
        catalog.groups.len(),
        catalog.board_count(),
        path.display()
    );
    Ok(catalog)
}

/// Surface boards without images; the run continues
pub(crate) fn report_anomalies(walk: &Walk) {
    for anomaly in &walk.anomalies {
        tracing::debug!("{anomaly:?}");
        output::info(&anomaly.to_string());
    }
}

fn write(rendered: &Rendered, output_dir: &Path) -> Result<()> {
    let path = output_dir.join(rendered.file_name);
    filesystem::write_file(&path, &rendered.content)
        .with_context(|| format!("Failed to write report {}", rendered.file_name))?;

    output::success(&format!("File: {} successfully written", path.display()));
    for line in &rendered.console {
        output::line(line);
    }
    Ok(())
}

/// Execute a single report command
pub fn execute(kind: ReportKind, settings: &Settings) -> Result<()> {
    let catalog = load_catalog(&settings.devices_path())?;
    let rendered = reports::render(kind, &catalog, &settings.links(), &super::timestamp());

    report_anomalies(&rendered.walk);
    write(&rendered, &settings.output_dir())
}

/// Execute every report against one loaded catalog
///
/// Anomalies are the same for every report and are shown once.
pub fn execute_all(settings: &Settings) -> Result<()> {
    let catalog = load_catalog(&settings.devices_path())?;
    let links = settings.links();
    let timestamp = super::timestamp();
    let output_dir = settings.output_dir();

    for (i, kind) in ReportKind::ALL.into_iter().enumerate() {
        let rendered = reports::render(kind, &catalog, &links, &timestamp);
        if i == 0 {
            report_anomalies(&rendered.walk);
        }
        write(&rendered, &output_dir)?;
    }
    Ok(())
}
