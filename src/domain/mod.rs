//! Core domain models for app-version
//!
//! - Package manager identifiers and their manifest conventions
//! - The resolved application version

mod app_version;
mod package_manager;

pub use app_version::AppVersion;
pub use package_manager::{validate_package_manager, ManifestFormat, PackageManager};
