//! app-version - print an application's version for build and CI scripts
//!
//! Reads the version from:
//! - package.json (npm)
//! - pyproject.toml (Poetry)

use app_version::cli::CliArgs;
use app_version::get_app_version;
use app_version::output::{create_formatter, OutputFormat};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Handle version flag
    if args.print_version {
        println!("app-version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    // clap enforces --package-manager unless --print-version was given
    let name = args.package_manager.as_deref().unwrap_or_default();

    if args.verbose {
        eprintln!("app-version v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Workspace: {}", args.base_dir().display());
    }

    let version = get_app_version(name, args.base_dir())?;

    if args.verbose {
        eprintln!("Manifest: {}", version.manifest.display());
        eprintln!("App version: {}", version.version);
    }

    let formatter = create_formatter(OutputFormat::from_cli(args.json));
    let mut stdout = io::stdout().lock();
    formatter.format(&version, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
