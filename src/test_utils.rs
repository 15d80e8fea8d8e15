//! Test utilities for property-based testing
//!
//! This module provides fixtures and proptest generators for catalogs.

use std::path::Path;

use crate::core::catalog::Catalog;

/// Parse a YAML fixture into a catalog, panicking on malformed input
pub fn catalog(yaml: &str) -> Catalog {
    Catalog::from_text(yaml, Path::new("fixture.yml")).expect("Fixture catalog must parse")
}

/// Small but complete catalog exercising every report
pub const SAMPLE_DEVICES: &str = r#"
# Kali ARM device catalog
devices:
  - raspberrypi:
    - name: Raspberry Pi 4
      cpu: Broadcom BCM2711
      cpu-cores: 4
      gpu: VideoCore VI
      ram: LPDDR4
      ram-size: [8GB, 1GB, 4GB, 2GB]
      ethernet: true
      ethernet-speed: 1000
      wifi: true
      bluetooth: true
      usb2: 2
      usb3: 2
      storage: [microSD, USB]
      images:
        - name: Raspberry Pi 2, 3, 4 and 400 (64-bit)
          image: raspberry-pi-arm64
          architecture: arm64
          slug: raspberry-pi
          support: kali
          kernel: vendor
          build-script: raspberry-pi-64-bit.sh
          kernel-version: "6.1"
          preferred-image: true
    - name: Raspberry Pi 400
      cpu: Broadcom BCM2711
      images:
        - name: Raspberry Pi 2, 3, 4 and 400 (64-bit)
          image: raspberry-pi-arm64
          architecture: arm64
          slug: raspberry-pi
          support: kali
          kernel: vendor
        - name: Raspberry Pi Zero W (P4wnP1 A.L.O.A)
          image: raspberry-pi-zero-w-p4wnp1-aloa-armel
          architecture: armel
          support: community
          kernel: custom
  - pine64:
    - name: Pinebook Pro
      images:
        - name: Pinebook Pro
          image: pinebook-pro-arm64
          architecture: arm64
          slug: pinebook-pro
          support: kali
          kernel: custom
          build-script: pinebook-pro.sh
    - name: Pinebook
      images:
        - name: Pinebook
          image: pinebook-arm64
          architecture: arm64
          support: eol
    - name: Rock64
"#;

/// NetHunter kernel catalog fixture
pub const SAMPLE_KERNELS: &str = r#"
# NetHunter kernels
- oneplus7:
    model: OnePlus 7
    kernels:
      - id: oneplus7-oos-ten
        versions:
          - android: ten
            linux: "4.14"
            kernel: "4.14.117"
            description: OxygenOS 10
            features: [HID, Wi-Fi injection]
            author: Re4son
            source: git clone https://github.com/Re4son/android_kernel_oneplus_sm8150
          - android: eleven
            linux: "4.14"
            description: OxygenOS 11
- nexus6p:
    model: Nexus 6P
    kernels:
      - id: angler
        versions:
          - android: oreo
            linux: "3.10"
"#;

pub mod generators {
    use proptest::prelude::*;

    use crate::core::catalog::{
        Board, Catalog, Image, KernelProvenance, Scalar, SupportTier, VendorGroup,
    };

    /// Vendor names drawn from a small pool so groups repeat
    pub fn vendor() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("raspberrypi".to_string()),
            Just("pine64".to_string()),
            Just("radxa".to_string()),
        ]
    }

    pub fn support_tier() -> impl Strategy<Value = SupportTier> {
        prop::sample::select(SupportTier::ALL.to_vec())
    }

    pub fn kernel_provenance() -> impl Strategy<Value = KernelProvenance> {
        prop::sample::select(KernelProvenance::ALL.to_vec())
    }

    /// Image whose display name comes from a small pool so names repeat
    pub fn image() -> impl Strategy<Value = Image> {
        (
            prop::sample::select(vec!["Pi 4", "Pi Zero W", "Pinebook Pro", "Rock 5"]),
            prop::sample::select(vec!["raspberry-pi-arm64", "pinebook-pro-arm64", "rock-5-arm64"]),
            prop::sample::select(vec!["arm64", "armhf", "armel"]),
            support_tier(),
            kernel_provenance(),
        )
            .prop_map(|(name, stem, arch, support, kernel)| Image {
                name: Scalar::from(name),
                file_stem: Scalar::from(stem),
                architecture: Scalar::from(arch),
                support,
                kernel,
                ..Image::default()
            })
    }

    /// Board that may or may not carry an image collection
    pub fn board() -> impl Strategy<Value = Board> {
        (
            "[A-Z][a-z]{0,6}",
            prop::option::of(prop::collection::vec(image(), 0..4)),
        )
            .prop_map(|(name, images)| Board {
                name: Scalar::from(name.as_str()),
                images,
                ..Board::default()
            })
    }

    pub fn catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec(
            (vendor(), prop::collection::vec(board(), 0..5))
                .prop_map(|(vendor, boards)| VendorGroup { vendor, boards }),
            0..5,
        )
        .prop_map(|groups| Catalog { groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_fixtures_parse() {
        let devices = catalog(SAMPLE_DEVICES);
        assert_eq!(devices.board_count(), 5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn test_catalog_generator_keeps_vendor_names(catalog in generators::catalog()) {
            for group in &catalog.groups {
                prop_assert!(!group.vendor.is_empty());
            }
        }
    }
}
