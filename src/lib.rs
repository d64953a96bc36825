//! app-version - read an application's version from its package manifest
//!
//! Supported manifests:
//! - npm (package.json, `version`)
//! - Poetry (pyproject.toml, `tool.poetry.version`)

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;

use domain::{validate_package_manager, AppVersion};
use error::AppError;
use std::path::Path;

/// Validate `package_manager` and resolve the version under `base_dir`
pub fn get_app_version(package_manager: &str, base_dir: &Path) -> Result<AppVersion, AppError> {
    let package_manager = validate_package_manager(package_manager)?;
    Ok(manifest::resolve_version(package_manager, base_dir)?)
}
