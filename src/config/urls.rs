//! Documentation, repository and download URLs

/// Kali ARM documentation base (one page per image slug)
pub const DOCS_BASE: &str = "https://www.kali.org/docs/arm";

/// Kali ARM build-scripts repository
pub const REPOSITORY: &str = "https://gitlab.com/kalilinux/build-scripts/kali-arm";

/// Blob base used to link build scripts inside the repository
pub const BLOB_BASE: &str = "https://gitlab.com/kalilinux/build-scripts/kali-arm/-/blob/main";

/// Release notes landing page
pub const RELEASES: &str = "https://www.kali.org/releases/";

/// Download page anchor for ARM images
pub const GET_KALI_ARM: &str = "https://www.kali.org/get-kali/#kali-arm";

/// Base for published ARM images (`<base>/kali-<release>/<file>`)
pub const IMAGE_DOWNLOAD_BASE: &str = "https://kali.download/arm-images";

/// Icon shown by the Raspberry Pi imager
pub const IMAGER_ICON: &str = "https://www.kali.org/images/kali-logo.svg";

/// Website shown by the Raspberry Pi imager
pub const WEBSITE: &str = "https://www.kali.org/";
