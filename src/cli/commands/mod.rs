//! CLI command implementations
//!
//! Each family of commands is implemented in its own submodule.

pub mod nethunter;
pub mod release;
pub mod report;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::config::settings::Settings;
use crate::core::reports::ReportKind;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate devices.md (hardware facts per board)
    Devices,

    /// Generate device-stats.md (image count per board)
    DeviceStats,

    /// Generate images.md (one row per image)
    Images,

    /// Generate image-stats.md (unique images per architecture)
    ImageStats,

    /// Generate image-overview.md (support status per image)
    ImageOverview,

    /// Generate kernel-stats.md (images per kernel provenance)
    KernelStats,

    /// Generate every devices.yml report
    All,

    /// Generate the NetHunter kernel table from kernels.yml
    NethunterKernels,

    /// Generate NetHunter kernel counts per Android version
    NethunterKernelStats,

    /// Write manifest.json for the images Kali publishes
    PreRelease(ReleaseArgs),

    /// Write rpi-imager.json listing the Raspberry Pi images
    RpiImager(ReleaseArgs),

    /// Write rpi-imager.json in the imager's os_list format from built images
    PostRelease {
        #[command(flatten)]
        args: ReleaseArgs,

        /// Release date shown by the imager (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        release_date: Option<String>,

        /// Recompute the SHA-256 of every image and compare with its checksum file
        #[arg(long)]
        verify: bool,
    },
}

/// Arguments shared by the release commands
#[derive(Args, Debug, Clone)]
pub struct ReleaseArgs {
    /// Device catalog [default: devices.yml]
    #[arg(short, long, value_name = "FILE")]
    pub inputfile: Option<PathBuf>,

    /// Directory for the generated manifest [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub outputdir: Option<PathBuf>,

    /// Release version (e.g. 2024.1)
    #[arg(short, long)]
    pub release: String,
}

impl Commands {
    /// Execute the command
    pub fn run(self, config: Option<&Path>) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        let settings = Settings::discover(config, &current_dir)
            .context("Failed to load settings")?;

        match self {
            Self::Devices => report::execute(ReportKind::Devices, &settings),
            Self::DeviceStats => report::execute(ReportKind::DeviceStats, &settings),
            Self::Images => report::execute(ReportKind::Images, &settings),
            Self::ImageStats => report::execute(ReportKind::ImageStats, &settings),
            Self::ImageOverview => report::execute(ReportKind::ImageOverview, &settings),
            Self::KernelStats => report::execute(ReportKind::KernelStats, &settings),
            Self::All => report::execute_all(&settings),
            Self::NethunterKernels => nethunter::execute_kernels(&settings),
            Self::NethunterKernelStats => nethunter::execute_stats(&settings),
            Self::PreRelease(args) => release::execute_pre_release(&args, &settings),
            Self::RpiImager(args) => release::execute_rpi_imager(&args, &settings),
            Self::PostRelease {
                args,
                release_date,
                verify,
            } => release::execute_post_release(&args, release_date, verify, &settings),
        }
    }
}

/// Footer timestamp for this run, in local time
pub(crate) fn timestamp() -> String {
    chrono::Local::now()
        .format(defaults::TIMESTAMP_FORMAT)
        .to_string()
}
