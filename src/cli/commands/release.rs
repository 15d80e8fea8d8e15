//! Release manifest commands
//!
//! Implements `kali-arm-docs pre-release`, `rpi-imager` and `post-release`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::report::{load_catalog, report_anomalies};
use super::ReleaseArgs;
use crate::cli::output;
use crate::config::settings::Settings;
use crate::core::release::{self, Selected, Selection};
use crate::error::{DocsError, ReleaseError};
use crate::infra::{artifacts, filesystem, xz};

const MANIFEST_FILE: &str = "manifest.json";
const IMAGER_FILE: &str = "rpi-imager.json";

struct Resolved {
    input: PathBuf,
    output_dir: PathBuf,
}

fn resolve(args: &ReleaseArgs, settings: &Settings) -> Resolved {
    Resolved {
        input: args
            .inputfile
            .clone()
            .unwrap_or_else(|| settings.devices_path()),
        output_dir: args
            .outputdir
            .clone()
            .unwrap_or_else(|| settings.output_dir()),
    }
}

fn select(input: &Path, selection: Selection) -> Result<Selected> {
    let catalog = load_catalog(input)?;
    let selected = release::select(&catalog, selection);
    report_anomalies(&selected.walk);
    if selected.count() == 0 {
        output::warning(&format!(
            "No images in {} match; the manifest will be empty",
            input.display()
        ));
    }
    Ok(selected)
}

fn write_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    filesystem::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(value).context("Failed to serialize manifest")?;
    filesystem::write_file(&path, &json)?;
    Ok(path)
}

fn print_stats(lines: &[String], manifest: &Path) {
    output::line("\nStats:");
    for line in lines {
        output::line(&format!("  - {line}"));
    }
    output::line("");
    output::success(&format!("Manifest file created\t: {}", manifest.display()));
}

/// Execute `kali-arm-docs pre-release`
pub fn execute_pre_release(args: &ReleaseArgs, settings: &Settings) -> Result<()> {
    let paths = resolve(args, settings);
    let selected = select(&paths.input, Selection::Published)?;

    let body = release::manifest(&selected, &args.release);
    let path = write_json(&paths.output_dir, MANIFEST_FILE, &body)?;

    print_stats(
        &[
            format!("Total devices\t: {}", selected.walk.devices),
            format!("Total images\t: {}", selected.walk.images),
            format!("{} images\t: {}", args.release, selected.count()),
        ],
        &path,
    );
    Ok(())
}

/// Execute `kali-arm-docs rpi-imager`
pub fn execute_rpi_imager(args: &ReleaseArgs, settings: &Settings) -> Result<()> {
    let paths = resolve(args, settings);
    let selected = select(&paths.input, Selection::RaspberryPi)?;

    let body = release::imager_manifest(&selected, &args.release);
    let path = write_json(&paths.output_dir, IMAGER_FILE, &body)?;

    print_stats(
        &[
            format!("Devices\t: {}", selected.walk.devices),
            format!("Images\t: {}", selected.count()),
        ],
        &path,
    );
    Ok(())
}

/// Execute `kali-arm-docs post-release`
///
/// Reads the built images from the output directory; any missing or
/// inconsistent artifact aborts before the manifest is written.
pub fn execute_post_release(
    args: &ReleaseArgs,
    release_date: Option<String>,
    verify: bool,
    settings: &Settings,
) -> Result<()> {
    let paths = resolve(args, settings);
    let selected = select(&paths.input, Selection::PublishedRaspberryPi)?;

    if selected.count() > 0 && !xz::is_xz_available() {
        return Err(DocsError::from(ReleaseError::ToolNotFound {
            tool: "xz".to_string(),
        })
        .into());
    }

    let release_date =
        release_date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let spinner = output::create_spinner("Inspecting release images...");
    let list = release::os_list(&selected, &args.release, &release_date, |filename| {
        spinner.set_message(format!("Inspecting {filename}"));
        tracing::info!("Inspecting {filename}");
        artifacts::inspect(&paths.output_dir, filename, verify)
    });
    spinner.finish_and_clear();
    let list = list.context("Failed to inspect release images")?;

    let path = write_json(&paths.output_dir, IMAGER_FILE, &list)?;

    print_stats(
        &[
            format!("Devices\t: {}", selected.walk.devices),
            format!("Images\t: {}", list.os_list.len()),
        ],
        &path,
    );
    Ok(())
}
