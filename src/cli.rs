//! CLI argument parsing module for app-version

use clap::Parser;
use std::path::{Path, PathBuf};

/// Print the application version recorded in a package manifest
#[derive(Parser, Debug, Clone)]
#[command(
    name = "app-version",
    about = "Print the application version from package.json or pyproject.toml"
)]
pub struct CliArgs {
    /// Package manager whose manifest holds the version (npm or poetry)
    #[arg(long, required_unless_present = "print_version")]
    pub package_manager: Option<String>,

    /// Directory containing the manifest (default: current directory)
    #[arg(long)]
    pub workspace_path: Option<PathBuf>,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print the tool's own version and exit
    #[arg(short = 'V', long = "print-version")]
    pub print_version: bool,
}

impl CliArgs {
    /// Directory the manifest is looked up in
    pub fn base_dir(&self) -> &Path {
        self.workspace_path
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
    }
}
