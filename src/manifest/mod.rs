//! Manifest lookup and version extraction
//!
//! This module provides functionality to:
//! - Locate the manifest for a package manager under a base directory
//! - Read the version field from package.json or pyproject.toml

mod package_json;
mod pyproject_toml;

pub use package_json::PackageJsonReader;
pub use pyproject_toml::PyprojectTomlReader;

use crate::domain::{AppVersion, ManifestFormat, PackageManager};
use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Trait for reading the version out of a manifest file
pub trait VersionReader {
    /// Extract the version string from manifest content
    ///
    /// `path` is only used for error reporting.
    fn read_version(&self, path: &Path, content: &str) -> Result<String, ManifestError>;

    /// Returns the package manager this reader handles
    fn package_manager(&self) -> PackageManager;
}

/// Get a version reader for the specified package manager
pub fn get_reader(package_manager: PackageManager) -> Box<dyn VersionReader> {
    match package_manager.manifest_format() {
        ManifestFormat::Json => Box::new(PackageJsonReader),
        ManifestFormat::Toml => Box::new(PyprojectTomlReader),
    }
}

/// Path of the manifest for `package_manager` under `base_dir`
pub fn manifest_path(package_manager: PackageManager, base_dir: &Path) -> PathBuf {
    base_dir.join(package_manager.manifest_filename())
}

/// Resolve the application version from the manifest under `base_dir`
pub fn resolve_version(
    package_manager: PackageManager,
    base_dir: &Path,
) -> Result<AppVersion, ManifestError> {
    let path = manifest_path(package_manager, base_dir);

    if !path.is_file() {
        return Err(ManifestError::not_found(path));
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;

    let version = get_reader(package_manager).read_version(&path, &content)?;
    Ok(AppVersion::new(package_manager, path, version))
}
