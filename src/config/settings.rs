//! Settings file handling
//!
//! Reads optional overrides from `kali-arm-docs.toml`. Every key is optional;
//! anything left out falls back to [`crate::config::defaults`] and
//! [`crate::config::urls`].
//!
//! ```toml
//! [paths]
//! devices = "devices.yml"
//! output_dir = "docs"
//!
//! [links]
//! docs_base = "https://www.kali.org/docs/arm"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{defaults, urls};
use crate::error::ConfigError;

/// Effective settings for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Input and output locations
    #[serde(default)]
    pub paths: PathSettings,

    /// Link bases used by field derivation
    #[serde(default)]
    pub links: LinkSettings,
}

/// Input and output locations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathSettings {
    /// Device catalog
    pub devices: Option<PathBuf>,

    /// NetHunter kernel catalog
    pub kernels: Option<PathBuf>,

    /// Directory for ARM reports
    pub output_dir: Option<PathBuf>,

    /// Directory for NetHunter reports
    pub nethunter_output_dir: Option<PathBuf>,

    /// Directory holding the per-Android-version kernel trees
    pub nethunter_root: Option<PathBuf>,
}

/// Link bases used by field derivation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkSettings {
    /// Documentation base for image slugs
    pub docs_base: Option<String>,

    /// Build-scripts repository
    pub repository: Option<String>,

    /// Blob base for build-script links
    pub blob_base: Option<String>,
}

/// Resolved link bases handed to the report layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub docs_base: String,
    pub repository: String,
    pub blob_base: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            docs_base: urls::DOCS_BASE.to_string(),
            repository: urls::REPOSITORY.to_string(),
            blob_base: urls::BLOB_BASE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, or from the default file in `dir`
    ///
    /// An explicit path must exist. The default file is optional.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Read {
                        path: path.to_path_buf(),
                        error: "file not found".to_string(),
                    });
                }
                Self::load_from_path(path)
            }
            None => Self::load_from_path(&dir.join(defaults::SETTINGS_FILE)),
        }
    }

    /// Load settings from a specific path
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Device catalog path
    #[must_use]
    pub fn devices_path(&self) -> PathBuf {
        self.paths
            .devices
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEVICES_FILE))
    }

    /// NetHunter kernel catalog path
    #[must_use]
    pub fn kernels_path(&self) -> PathBuf {
        self.paths
            .kernels
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::KERNELS_FILE))
    }

    /// Directory for ARM reports
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.paths
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT_DIR))
    }

    /// Directory for NetHunter reports
    #[must_use]
    pub fn nethunter_output_dir(&self) -> PathBuf {
        self.paths
            .nethunter_output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::NETHUNTER_OUTPUT_DIR))
    }

    /// Directory holding the per-Android-version kernel trees
    #[must_use]
    pub fn nethunter_root(&self) -> PathBuf {
        self.paths
            .nethunter_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::NETHUNTER_ROOT))
    }

    /// Link bases with overrides applied
    #[must_use]
    pub fn links(&self) -> Links {
        let fallback = Links::default();
        Links {
            docs_base: self.links.docs_base.clone().unwrap_or(fallback.docs_base),
            repository: self.links.repository.clone().unwrap_or(fallback.repository),
            blob_base: self.links.blob_base.clone().unwrap_or(fallback.blob_base),
        }
    }
}
