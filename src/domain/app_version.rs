//! Result of a version lookup

use crate::domain::PackageManager;
use serde::Serialize;
use std::path::PathBuf;

/// A version string read from a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppVersion {
    /// Package manager whose manifest was read
    pub package_manager: PackageManager,
    /// Path of the manifest file
    pub manifest: PathBuf,
    /// Version exactly as written in the manifest
    pub version: String,
}

impl AppVersion {
    pub fn new(
        package_manager: PackageManager,
        manifest: impl Into<PathBuf>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            package_manager,
            manifest: manifest.into(),
            version: version.into(),
        }
    }
}
