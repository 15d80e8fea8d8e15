//! Configuration and constants
//!
//! - [`urls`] - documentation, repository and download URLs
//! - [`defaults`] - default file names, directories and lists
//! - [`settings`] - optional `kali-arm-docs.toml` overrides

pub mod defaults;
pub mod settings;
pub mod urls;
