//! Package manager identifiers and their manifest conventions

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Manifest file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// npm (package.json)
    Npm,
    /// Poetry (pyproject.toml)
    Poetry,
}

impl PackageManager {
    /// Returns the command-line name of this package manager
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Poetry => "poetry",
        }
    }

    /// Returns the manifest filename for this package manager
    pub fn manifest_filename(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package.json",
            PackageManager::Poetry => "pyproject.toml",
        }
    }

    pub fn manifest_format(&self) -> ManifestFormat {
        match self {
            PackageManager::Npm => ManifestFormat::Json,
            PackageManager::Poetry => ManifestFormat::Toml,
        }
    }

    /// Key path of the version field inside the manifest
    pub fn version_key_path(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["version"],
            PackageManager::Poetry => &["tool", "poetry", "version"],
        }
    }

    /// Dotted form of [`PackageManager::version_key_path`], used in messages
    pub fn version_key(&self) -> String {
        self.version_key_path().join(".")
    }

    /// Returns all supported package managers
    pub fn all() -> &'static [PackageManager] {
        &[PackageManager::Npm, PackageManager::Poetry]
    }

    /// Comma-separated list of valid names
    pub fn valid_names() -> String {
        Self::all()
            .iter()
            .map(|pm| pm.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for PackageManager {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|pm| pm.as_str() == s)
            .copied()
            .ok_or_else(|| ConfigError::invalid_package_manager(s))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a package manager name given on the command line
///
/// The comparison is exact: `NPM` or ` npm` are rejected.
pub fn validate_package_manager(name: &str) -> Result<PackageManager, ConfigError> {
    name.parse()
}
