//! Default configuration values

/// Device catalog read by every ARM report
pub const DEVICES_FILE: &str = "devices.yml";

/// NetHunter kernel catalog
pub const KERNELS_FILE: &str = "kernels.yml";

/// Optional settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "kali-arm-docs.toml";

/// Directory ARM reports are written to
pub const OUTPUT_DIR: &str = ".";

/// Directory NetHunter reports are written to
pub const NETHUNTER_OUTPUT_DIR: &str = "md";

/// Directory holding one sub-directory per Android version
pub const NETHUNTER_ROOT: &str = ".";

/// Android versions counted by the NetHunter kernel statistics, in table order
pub const ANDROID_VERSIONS: &[&str] = &[
    "kitkat",
    "lollipop",
    "marshmallow",
    "nougat",
    "oreo",
    "pie",
    "ten",
    "eleven",
];

/// Prefix of every released image file name
pub const RELEASE_FILE_PREFIX: &str = "kali-linux";

/// File stem prefix selecting Raspberry Pi images
pub const RASPBERRY_PI_PREFIX: &str = "raspberry";

/// Timestamp format used in report footers
pub const TIMESTAMP_FORMAT: &str = "%Y-%B-%d %H:%M:%S";
