//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory holding catalogs and generated files, and
/// runs the binary inside it.
pub struct TestProject {
    /// Temporary directory for the test workspace
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a workspace with `devices.yml` already written
    pub fn with_devices() -> Self {
        let project = Self::new();
        project.create_file("devices.yml", SAMPLE_DEVICES);
        project
    }

    /// Get the path to the test workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test workspace
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test workspace
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run kali-arm-docs in the workspace
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_kali-arm-docs"))
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("KALI_ARM_DOCS_CONFIG")
            .args(args)
            .output()
            .expect("Failed to execute kali-arm-docs")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard output as text
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error as text
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Device catalog covering every report
///
/// - Raspberry Pi 4 and 400 share one published image
/// - the `raspberrypi` vendor appears in two groups
/// - Rock64 has no images at all
#[allow(dead_code)]
pub const SAMPLE_DEVICES: &str = r#"
# Kali ARM devices
# ----------------
devices:
  - raspberrypi:
    - name: Raspberry Pi 4
      cpu: Broadcom BCM2711
      cpu-cores: 4
      ram-size: [8GB, 1GB, 4GB, 2GB]
      storage: [USB, microSD]
      images:
        - name: Raspberry Pi 2, 3, 4 and 400 (64-bit)
          image: raspberry-pi-arm64
          architecture: arm64
          slug: raspberry-pi
          support: kali
          kernel: vendor
          build-script: raspberry-pi-64-bit.sh
          preferred-image: true
    - name: Raspberry Pi 400
      images:
        - name: Raspberry Pi 2, 3, 4 and 400 (64-bit)
          image: raspberry-pi-arm64
          architecture: arm64
          slug: raspberry-pi
          support: kali
          kernel: vendor
  - pine64:
    - name: Pinebook Pro
      images:
        - name: Pinebook Pro
          image: pinebook-pro-arm64
          architecture: arm64
          slug: pinebook-pro
          support: kali
          kernel: custom
    - name: Rock64
  - raspberrypi:
    - name: Raspberry Pi Zero W
      images:
        - name: Raspberry Pi Zero W (P4wnP1 A.L.O.A)
          image: raspberry-pi-zero-w-p4wnp1-aloa-armel
          architecture: armel
          support: community
          kernel: custom
"#;

/// NetHunter kernel catalog
#[allow(dead_code)]
pub const SAMPLE_KERNELS: &str = r#"
# NetHunter kernels
- oneplus7:
    model: OnePlus 7
    kernels:
      - id: oneplus7-oos-ten
        versions:
          - android: ten
            linux: "4.14"
            description: OxygenOS 10
            features: [HID, Wi-Fi injection]
            author: Re4son
            source: git clone https://github.com/Re4son/android_kernel_oneplus_sm8150
"#;
