//! kali-arm-docs - Kali ARM documentation generator
//!
//! Entry point for the kali-arm-docs command-line application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kali_arm_docs::cli::output::{display_error, OutputConfig};
use kali_arm_docs::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Apply output configuration globally
    let output_config = OutputConfig::new(cli.quiet, cli.verbose);
    output_config.apply_global();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(output_config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
