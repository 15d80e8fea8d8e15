//! Device catalog model
//!
//! Loads `devices.yml` into a read-only three-level tree:
//! vendor group → board → image.
//!
//! The file is YAML interleaved with comment lines. Comment-only and blank
//! lines are stripped before parsing, so a stray `#` line inside the document
//! never reaches the parser.
//!
//! Scalar fields are kept loosely typed ([`Scalar`]): the catalog mixes
//! strings, numbers and booleans for the same keys, and every consumer only
//! needs their display form. Missing scalars render as the empty string.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::Path;

use crate::error::LoadError;

/// Marker that makes a board key an image collection
const IMAGES_KEY: &str = "images";

/// Drop blank lines and lines whose trimmed form starts with `#`
pub fn strip_comments(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

/// Strip comments and parse the remainder as a YAML document
///
/// Merge keys (`<<: *anchor`) are resolved, so boards sharing an anchored
/// block see its keys as their own. Duplicate keys in one mapping are a
/// parse error.
pub fn parse_document(text: &str) -> Result<Value, serde_yaml::Error> {
    let mut document: Value = serde_yaml::from_str(&strip_comments(text))?;
    document.apply_merge()?;
    Ok(document)
}

/// A loosely typed scalar field
///
/// Renders strings verbatim, numbers and booleans through their usual
/// formatting, sequences joined with `", "`, and null as nothing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Scalar(Value);

impl Scalar {
    /// Whether the field renders as the empty string
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            _ => self.to_string().is_empty(),
        }
    }

    /// Owned display form
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self(Value::Null)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null | Value::Mapping(_) => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Scalar(item.clone()))?;
                }
                Ok(())
            }
            Value::Tagged(tagged) => write!(f, "{}", Scalar(tagged.value.clone())),
        }
    }
}

/// A field holding one or more values (`ram-size`, `storage`)
///
/// Accepts either a sequence or a single scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarList(Vec<String>);

impl ScalarList {
    /// The individual values in catalog order
    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Sequence(items) => Self(
                items
                    .into_iter()
                    .map(|item| Scalar(item).text())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
            other => {
                let single = Scalar(other).text();
                if single.is_empty() {
                    Self::default()
                } else {
                    Self(vec![single])
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for ScalarList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl<S: Into<String>> FromIterator<S> for ScalarList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Release status of an image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SupportTier {
    /// Built and published by Kali
    Kali,
    /// Buildable from the scripts, not published
    Community,
    /// Retired
    Eol,
    /// Missing or unrecognised classification
    #[default]
    Unknown,
}

impl SupportTier {
    /// Every tier, in report order
    pub const ALL: [Self; 4] = [Self::Kali, Self::Community, Self::Eol, Self::Unknown];

    /// Human label
    pub fn label(self) -> &'static str {
        match self {
            Self::Kali => "Kali",
            Self::Community => "Community",
            Self::Eol => "EOL",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<Scalar> for SupportTier {
    fn from(value: Scalar) -> Self {
        match value.text().trim().to_ascii_lowercase().as_str() {
            "kali" => Self::Kali,
            "community" => Self::Community,
            "eol" => Self::Eol,
            _ => Self::Unknown,
        }
    }
}

/// Where an image's kernel comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KernelProvenance {
    /// Kernel built from a custom tree
    Custom,
    /// Kali's packaged kernel
    Kali,
    /// Vendor-supplied kernel
    Vendor,
    /// Missing or unrecognised classification
    #[default]
    Unknown,
}

impl KernelProvenance {
    /// Every provenance, in report order
    pub const ALL: [Self; 4] = [Self::Custom, Self::Kali, Self::Vendor, Self::Unknown];

    /// Human label
    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Kali => "Kali",
            Self::Vendor => "Vendor",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<Scalar> for KernelProvenance {
    fn from(value: Scalar) -> Self {
        match value.text().trim().to_ascii_lowercase().as_str() {
            "custom" => Self::Custom,
            "kali" => Self::Kali,
            "vendor" => Self::Vendor,
            _ => Self::Unknown,
        }
    }
}

/// Image as written in the catalog
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawImage {
    #[serde(default)]
    name: Scalar,
    #[serde(default, rename = "image")]
    file_stem: Scalar,
    #[serde(default)]
    architecture: Scalar,
    #[serde(default)]
    slug: Scalar,
    #[serde(default)]
    support: Scalar,
    #[serde(default)]
    kernel: Scalar,
    #[serde(default)]
    build_script: Scalar,
    #[serde(default)]
    kernel_version: Scalar,
    #[serde(default)]
    preferred_image: Scalar,
    #[serde(default)]
    image_notes: Scalar,
}

/// One downloadable OS image
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawImage")]
pub struct Image {
    /// Display name; de-duplication key
    pub name: Scalar,

    /// File name stem (`raspberry-pi-arm64`)
    pub file_stem: Scalar,

    pub architecture: Scalar,

    /// Documentation URL slug
    pub slug: Scalar,

    pub support: SupportTier,

    /// `support` as written, for display
    pub support_text: Scalar,

    pub kernel: KernelProvenance,

    /// `kernel` as written, for display
    pub kernel_text: Scalar,

    /// Path of the build script inside the repository
    pub build_script: Scalar,

    pub kernel_version: Scalar,

    pub preferred_image: Scalar,

    pub image_notes: Scalar,
}

impl From<RawImage> for Image {
    fn from(raw: RawImage) -> Self {
        Self {
            name: raw.name,
            file_stem: raw.file_stem,
            architecture: raw.architecture,
            slug: raw.slug,
            support: SupportTier::from(raw.support.clone()),
            support_text: raw.support,
            kernel: KernelProvenance::from(raw.kernel.clone()),
            kernel_text: raw.kernel,
            build_script: raw.build_script,
            kernel_version: raw.kernel_version,
            preferred_image: raw.preferred_image,
            image_notes: raw.image_notes,
        }
    }
}

/// Board as written in the catalog, before image collections are gathered
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawBoard {
    #[serde(default)]
    name: Scalar,
    #[serde(default)]
    cpu: Scalar,
    #[serde(default)]
    cpu_cores: Scalar,
    #[serde(default)]
    gpu: Scalar,
    #[serde(default)]
    ram: Scalar,
    #[serde(default)]
    ram_size: ScalarList,
    #[serde(default)]
    ethernet: Scalar,
    #[serde(default)]
    ethernet_speed: Scalar,
    #[serde(default)]
    wifi: Scalar,
    #[serde(default)]
    bluetooth: Scalar,
    #[serde(default)]
    usb2: Scalar,
    #[serde(default)]
    usb3: Scalar,
    #[serde(default)]
    storage: ScalarList,
    #[serde(default)]
    notes: Scalar,
    #[serde(flatten)]
    rest: Mapping,
}

/// One hardware model
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pub name: Scalar,
    pub cpu: Scalar,
    pub cpu_cores: Scalar,
    pub gpu: Scalar,
    pub ram: Scalar,
    pub ram_size: ScalarList,
    pub ethernet: Scalar,
    pub ethernet_speed: Scalar,
    pub wifi: Scalar,
    pub bluetooth: Scalar,
    pub usb2: Scalar,
    pub usb3: Scalar,
    pub storage: ScalarList,
    pub notes: Scalar,

    /// Images gathered from every images-like key, in key order.
    /// `None` when the board has no such key at all.
    pub images: Option<Vec<Image>>,
}

impl Board {
    /// Whether the board carries at least one images-like key
    pub fn has_image_collection(&self) -> bool {
        self.images.is_some()
    }

    /// Images in board order; empty when there is no collection
    pub fn images(&self) -> &[Image] {
        self.images.as_deref().unwrap_or(&[])
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = serde_yaml::Error;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut images: Option<Vec<Image>> = None;

        for (key, value) in raw.rest {
            let is_collection = key.as_str().is_some_and(|k| k.contains(IMAGES_KEY));
            if !is_collection {
                continue;
            }
            let collection = images.get_or_insert_with(Vec::new);
            if !value.is_null() {
                let parsed: Vec<Image> = serde_yaml::from_value(value)?;
                collection.extend(parsed);
            }
        }

        Ok(Self {
            name: raw.name,
            cpu: raw.cpu,
            cpu_cores: raw.cpu_cores,
            gpu: raw.gpu,
            ram: raw.ram,
            ram_size: raw.ram_size,
            ethernet: raw.ethernet,
            ethernet_speed: raw.ethernet_speed,
            wifi: raw.wifi,
            bluetooth: raw.bluetooth,
            usb2: raw.usb2,
            usb3: raw.usb3,
            storage: raw.storage,
            notes: raw.notes,
            images,
        })
    }
}

/// A vendor name and its boards
///
/// Vendor names are grouping keys, not identities: the same vendor may
/// appear in several groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorGroup {
    pub vendor: String,
    pub boards: Vec<Board>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    devices: Option<Vec<IndexMap<String, Option<Vec<Board>>>>>,
}

/// The whole device catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub groups: Vec<VendorGroup>,
}

impl Catalog {
    /// Convert a parsed document into the typed catalog
    ///
    /// Each element of `devices` may name several vendors; they are kept in
    /// key order.
    pub fn from_document(document: Value) -> Result<Self, serde_yaml::Error> {
        let raw: RawCatalog = serde_yaml::from_value(document)?;
        let groups = raw
            .devices
            .unwrap_or_default()
            .into_iter()
            .flat_map(IndexMap::into_iter)
            .map(|(vendor, boards)| VendorGroup {
                vendor,
                boards: boards.unwrap_or_default(),
            })
            .collect();
        Ok(Self { groups })
    }

    /// Parse catalog text, naming `origin` in any error
    pub fn from_text(text: &str, origin: &Path) -> Result<Self, LoadError> {
        let document = parse_document(text).map_err(|e| LoadError::Parse {
            path: origin.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_document(document).map_err(|e| LoadError::Shape {
            path: origin.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Number of boards across every group
    pub fn board_count(&self) -> usize {
        self.groups.iter().map(|g| g.boards.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Kali ARM devices
# ----------------
devices:
  - raspberrypi:
    # Raspberry Pi 4
    - name: Raspberry Pi 4
      cpu: Broadcom BCM2711
      cpu-cores: 4
      ram-size: [8GB, 2GB, 4GB, 1GB]
      storage: microSD
      wifi: true
      images:
        - name: Raspberry Pi 2, 3, 4 and 400 (64-bit)
          image: raspberry-pi-arm64
          architecture: arm64
          slug: raspberry-pi
          support: kali
          kernel: vendor
          build-script: raspberry-pi-64-bit.sh
  - pine64:
    - name: Pinebook Pro
      kali-images:
        - name: Pinebook Pro
          image: pinebook-pro-arm64
          support: Community
    - name: Mystery Board
"#;

    // ============================================
    // Unit Tests - Comment stripping
    // ============================================

    #[test]
    fn test_strip_comments_removes_comment_and_blank_lines() {
        let text = "# header\n\nkey: value\n   # indented comment\n  nested: 1\n";
        assert_eq!(strip_comments(text), "key: value\n  nested: 1\n");
    }

    #[test]
    fn test_parse_document_single_key() {
        let document = parse_document("# comment\nkey: value\n").unwrap();
        let mapping = document.as_mapping().expect("top level is a mapping");
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get("key").and_then(Value::as_str),
            Some("value")
        );
    }

    #[test]
    fn test_parse_document_invalid_yaml() {
        assert!(parse_document("devices: [unclosed\n").is_err());
    }

    // ============================================
    // Unit Tests - Catalog shape
    // ============================================

    #[test]
    fn test_catalog_parses_groups_in_order() {
        let catalog = Catalog::from_text(SAMPLE, Path::new("devices.yml")).unwrap();

        assert_eq!(catalog.groups.len(), 2);
        assert_eq!(catalog.groups[0].vendor, "raspberrypi");
        assert_eq!(catalog.groups[1].vendor, "pine64");
        assert_eq!(catalog.board_count(), 3);
    }

    #[test]
    fn test_board_scalars_render_loosely_typed_values() {
        let catalog = Catalog::from_text(SAMPLE, Path::new("devices.yml")).unwrap();
        let board = &catalog.groups[0].boards[0];

        assert_eq!(board.name.text(), "Raspberry Pi 4");
        assert_eq!(board.cpu_cores.text(), "4");
        assert_eq!(board.wifi.text(), "true");
        assert_eq!(board.gpu.text(), "");
        assert!(board.gpu.is_empty());
        assert_eq!(board.ram_size.items(), ["8GB", "2GB", "4GB", "1GB"]);
        assert_eq!(board.storage.items(), ["microSD"]);
    }

    #[test]
    fn test_images_like_keys_are_collected() {
        let catalog = Catalog::from_text(SAMPLE, Path::new("devices.yml")).unwrap();
        let pinebook = &catalog.groups[1].boards[0];

        assert!(pinebook.has_image_collection());
        assert_eq!(pinebook.images().len(), 1);
        assert_eq!(pinebook.images()[0].support, SupportTier::Community);
        assert_eq!(pinebook.images()[0].kernel, KernelProvenance::Unknown);
    }

    #[test]
    fn test_board_without_images_key() {
        let catalog = Catalog::from_text(SAMPLE, Path::new("devices.yml")).unwrap();
        let mystery = &catalog.groups[1].boards[1];

        assert!(!mystery.has_image_collection());
        assert!(mystery.images().is_empty());
    }

    #[test]
    fn test_image_fields() {
        let catalog = Catalog::from_text(SAMPLE, Path::new("devices.yml")).unwrap();
        let image = &catalog.groups[0].boards[0].images()[0];

        assert_eq!(image.file_stem.text(), "raspberry-pi-arm64");
        assert_eq!(image.slug.text(), "raspberry-pi");
        assert_eq!(image.support, SupportTier::Kali);
        assert_eq!(image.kernel, KernelProvenance::Vendor);
        assert_eq!(image.build_script.text(), "raspberry-pi-64-bit.sh");
        assert!(image.image_notes.is_empty());
    }

    #[test]
    fn test_unrecognised_classification_keeps_its_text() {
        let text = "devices:\n  - acme:\n    - name: A\n      images:\n        - name: I\n          support: beta\n          kernel: Mainline\n";
        let catalog = Catalog::from_text(text, Path::new("devices.yml")).unwrap();
        let image = &catalog.groups[0].boards[0].images()[0];

        assert_eq!(image.support, SupportTier::Unknown);
        assert_eq!(image.support_text.text(), "beta");
        assert_eq!(image.kernel, KernelProvenance::Unknown);
        assert_eq!(image.kernel_text.text(), "Mainline");
    }

    #[test]
    fn test_merge_key_brings_in_images() {
        let text = r"
common: &pi
  images:
    - name: Shared
      support: kali
devices:
  - acme:
    - name: Merged
      <<: *pi
    - name: Own
      <<: *pi
      cpu: Cortex-A53
";
        let catalog = Catalog::from_text(text, Path::new("devices.yml")).unwrap();
        let merged = &catalog.groups[0].boards[0];
        let own = &catalog.groups[0].boards[1];

        assert!(merged.has_image_collection());
        assert_eq!(merged.images().len(), 1);
        assert_eq!(merged.images()[0].name.text(), "Shared");
        assert_eq!(merged.images()[0].support, SupportTier::Kali);
        assert_eq!(own.images().len(), 1);
        assert_eq!(own.cpu.text(), "Cortex-A53");
    }

    #[test]
    fn test_duplicate_key_is_parse_error() {
        let text = "devices:\n  - acme:\n    - name: A\n      notes: first\n      notes: second\n";
        let err = Catalog::from_text(text, Path::new("devices.yml")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("devices.yml"));
    }

    #[test]
    fn test_repeated_vendor_groups_are_kept() {
        let text = "devices:\n  - acme:\n    - name: A\n  - acme:\n    - name: B\n";
        let catalog = Catalog::from_text(text, Path::new("devices.yml")).unwrap();

        assert_eq!(catalog.groups.len(), 2);
        assert!(catalog.groups.iter().all(|g| g.vendor == "acme"));
    }

    #[test]
    fn test_null_vendor_has_no_boards() {
        let text = "devices:\n  - acme:\n";
        let catalog = Catalog::from_text(text, Path::new("devices.yml")).unwrap();

        assert_eq!(catalog.groups.len(), 1);
        assert!(catalog.groups[0].boards.is_empty());
    }

    #[test]
    fn test_empty_images_key_is_still_a_collection() {
        let text = "devices:\n  - acme:\n    - name: A\n      images:\n";
        let catalog = Catalog::from_text(text, Path::new("devices.yml")).unwrap();
        let board = &catalog.groups[0].boards[0];

        assert!(board.has_image_collection());
        assert!(board.images().is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Catalog::from_text("devices: [\n", Path::new("broken.yml")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.yml"));
    }

    #[test]
    fn test_shape_error_names_file() {
        let err = Catalog::from_text("devices: 42\n", Path::new("odd.yml")).unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
        assert!(err.to_string().contains("odd.yml"));
    }

    // ============================================
    // Unit Tests - Classifications
    // ============================================

    #[test]
    fn test_support_tier_from_scalar() {
        assert_eq!(SupportTier::from(Scalar::from("kali")), SupportTier::Kali);
        assert_eq!(SupportTier::from(Scalar::from("EOL")), SupportTier::Eol);
        assert_eq!(SupportTier::from(Scalar::from("beta")), SupportTier::Unknown);
        assert_eq!(SupportTier::from(Scalar::default()), SupportTier::Unknown);
    }

    #[test]
    fn test_kernel_provenance_from_scalar() {
        assert_eq!(
            KernelProvenance::from(Scalar::from("custom")),
            KernelProvenance::Custom
        );
        assert_eq!(
            KernelProvenance::from(Scalar::from("Vendor")),
            KernelProvenance::Vendor
        );
        assert_eq!(
            KernelProvenance::from(Scalar::default()),
            KernelProvenance::Unknown
        );
    }

    #[test]
    fn test_scalar_list_single_value() {
        let list: ScalarList = serde_yaml::from_str("16GB").unwrap();
        assert_eq!(list.items(), ["16GB"]);

        let empty: ScalarList = serde_yaml::from_str("~").unwrap();
        assert!(empty.is_empty());
    }
}
