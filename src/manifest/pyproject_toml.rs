//! pyproject.toml reader for Poetry projects
//!
//! Reads `tool.poetry.version`. PEP 621 `project.version` is not consulted.

use crate::domain::PackageManager;
use crate::error::ManifestError;
use crate::manifest::VersionReader;
use std::path::Path;
use toml::{Table, Value};

/// Reader for pyproject.toml files
pub struct PyprojectTomlReader;

impl VersionReader for PyprojectTomlReader {
    fn read_version(&self, path: &Path, content: &str) -> Result<String, ManifestError> {
        let toml = content
            .parse::<Table>()
            .map(Value::Table)
            .map_err(|e| ManifestError::toml_parse_error(path, e.to_string()))?;

        let package_manager = self.package_manager();
        let version = package_manager
            .version_key_path()
            .iter()
            .try_fold(&toml, |value, key| value.get(key))
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty());

        version
            .map(str::to_string)
            .ok_or_else(|| ManifestError::invalid_version(path, package_manager.version_key()))
    }

    fn package_manager(&self) -> PackageManager {
        PackageManager::Poetry
    }
}
