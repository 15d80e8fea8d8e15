//! NetHunter kernel report commands

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output;
use crate::config::defaults;
use crate::config::settings::Settings;
use crate::core::kernels::{self, KernelCatalog};
use crate::error::DocsError;
use crate::infra::{filesystem, kernel_dirs};

/// Read and parse the NetHunter kernel catalog
pub fn load_kernel_catalog(path: &Path) -> Result<KernelCatalog, DocsError> {
    let text = filesystem::read_catalog(path)?;
    let catalog = KernelCatalog::from_text(&text, path)?;
    tracing::info!(
        "Loaded {} kernel groups, {} kernel versions from {}",
        catalog.groups.len(),
        catalog.version_count(),
        path.display()
    );
    Ok(catalog)
}

/// Execute `kali-arm-docs nethunter-kernels`
pub fn execute_kernels(settings: &Settings) -> Result<()> {
    let catalog = load_kernel_catalog(&settings.kernels_path())?;

    let document = kernels::kernels_document(&catalog, &settings.links(), &super::timestamp());
    let path = settings.nethunter_output_dir().join("kernels.md");
    filesystem::write_file(&path, &document.render())?;

    output::success(&format!("File: {} successfully written", path.display()));
    output::line(&format!("Kernels: {}", document.table.len()));
    Ok(())
}

/// Execute `kali-arm-docs nethunter-kernel-stats`
pub fn execute_stats(settings: &Settings) -> Result<()> {
    let root = settings.nethunter_root();
    let counts = kernel_dirs::count_versions(&root, defaults::ANDROID_VERSIONS)
        .with_context(|| format!("Failed to count kernels under {}", root.display()))?;

    let document = kernels::android_stats_document(&counts, &settings.links(), &super::timestamp());
    let path = settings.nethunter_output_dir().join("kernel-stats.md");
    filesystem::write_file(&path, &document.render())?;

    output::success(&format!("File: {} successfully written", path.display()));
    output::line(&format!("Kernels: {}", kernels::total_kernels(&counts)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::test_utils::SAMPLE_KERNELS;
    use tempfile::TempDir;

    #[test]
    fn test_load_kernel_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kernels.yml");
        std::fs::write(&path, SAMPLE_KERNELS).unwrap();

        let catalog = load_kernel_catalog(&path).unwrap();
        assert_eq!(catalog.version_count(), 3);
    }

    #[test]
    fn test_load_kernel_catalog_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_kernel_catalog(&temp_dir.path().join("kernels.yml")).unwrap_err();
        assert!(matches!(err, DocsError::Load(LoadError::Read { .. })));
    }
}
