//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with locating, reading or parsing the manifest
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::PackageManager;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error (for package.json)
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// TOML parsing error (for pyproject.toml)
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Version key missing, empty or not a string
    #[error("invalid version in {path}: '{key}' is missing or empty")]
    InvalidVersion { path: PathBuf, key: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Package manager name outside the supported set
    #[error("invalid package manager '{value}': valid options are {valid}")]
    InvalidPackageManager { value: String, valid: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidVersion error
    pub fn invalid_version(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        ManifestError::InvalidVersion {
            path: path.into(),
            key: key.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidPackageManager error listing the accepted names
    pub fn invalid_package_manager(value: impl Into<String>) -> Self {
        ConfigError::InvalidPackageManager {
            value: value.into(),
            valid: PackageManager::valid_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/package.json");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_manifest_error_toml_parse() {
        let err = ManifestError::toml_parse_error("/path/to/pyproject.toml", "invalid key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("invalid key"));
    }

    #[test]
    fn test_manifest_error_invalid_version() {
        let err = ManifestError::invalid_version("/path/to/pyproject.toml", "tool.poetry.version");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version"));
        assert!(msg.contains("tool.poetry.version"));
    }

    #[test]
    fn test_manifest_error_read_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::read_error("/path/to/package.json", io);
        assert!(err.to_string().contains("failed to read manifest file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_invalid_package_manager() {
        let err = ConfigError::invalid_package_manager("yarn");
        let msg = format!("{}", err);
        assert_eq!(
            msg,
            "invalid package manager 'yarn': valid options are npm, poetry"
        );
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::not_found("/path").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::invalid_package_manager("pip").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("invalid package manager 'pip'"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
