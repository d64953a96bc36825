//! package.json reader for npm projects
//!
//! Reads the top-level `version` field.

use crate::domain::PackageManager;
use crate::error::ManifestError;
use crate::manifest::VersionReader;
use serde_json::Value;
use std::path::Path;

/// Reader for package.json files
pub struct PackageJsonReader;

impl VersionReader for PackageJsonReader {
    fn read_version(&self, path: &Path, content: &str) -> Result<String, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        let package_manager = self.package_manager();
        let version = package_manager
            .version_key_path()
            .iter()
            .try_fold(&json, |value, key| value.get(key))
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty());

        version
            .map(str::to_string)
            .ok_or_else(|| ManifestError::invalid_version(path, package_manager.version_key()))
    }

    fn package_manager(&self) -> PackageManager {
        PackageManager::Npm
    }
}
