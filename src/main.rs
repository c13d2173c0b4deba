use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use site_prep::bundle::{BuildMode, BundleDriver};
use site_prep::check::{check_site, render_report};
use site_prep::config::ProjectConfig;

#[derive(Parser)]
#[command(name = "site-prep", version, about = "Build and verify a static multi-page site")]
struct Cli {
    /// Project configuration file (defaults to site.config.json in the
    /// working directory, falling back to built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle the JavaScript entry point and optional vendor stylesheet
    Build {
        /// Rebuild continuously as inputs change
        #[arg(long)]
        watch: bool,
    },
    /// Verify that local src/href/url/import references resolve to files
    Check {
        /// Directory to scan (defaults to the current directory)
        root: Option<PathBuf>,
        /// Emit the broken reference list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ProjectConfig::from_path(path)?,
        None => ProjectConfig::discover(Path::new(".")),
    };
    let layout = config.into_layout();

    match cli.command {
        Commands::Build { watch } => {
            let mode = if watch { BuildMode::Watch } else { BuildMode::Once };
            BundleDriver::new(&layout).run(mode)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { root, json } => {
            let root = root.unwrap_or_else(|| PathBuf::from("."));
            let report = check_site(&root, &layout)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report.broken)?);
            } else {
                render_report(&report);
            }
            // Broken references fail the command so it can gate CI.
            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
