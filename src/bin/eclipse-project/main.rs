//! eclipse-project - generate Eclipse metadata for a Bazel workspace

use anyhow::{Context, Result};
use clap::Parser;

use buildtools::core::Workspace;
use buildtools::eclipse::DEFAULT_PROJECT_NAME;
use buildtools::ops::{generate, GenerateOptions};
use buildtools::util::{interrupt, logging, ProjectConfig};

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    logging::init(if cli.verbose {
        "buildtools=debug"
    } else {
        "buildtools=info"
    });

    if let Err(e) = interrupt::install() {
        tracing::warn!("could not install Ctrl-C handler: {}", e);
    }

    if let Err(e) = run(cli) {
        if interrupt::is_interruption(&e) {
            eprintln!("Interrupted by user");
        } else {
            eprintln!("error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let start = match cli.workspace {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    let ws = Workspace::discover(&start)?;
    tracing::debug!("workspace root: {}", ws.root().display());

    // An explicit --config must exist; the default location is optional.
    let config = match cli.config {
        Some(path) => ProjectConfig::load(&path)?,
        None => ProjectConfig::load_or_default(&ws.config_file())?,
    };

    let options = GenerateOptions {
        project_name: cli
            .name
            .or(config.name.clone())
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        bazel: cli.bazel,
        targets: config
            .classpath_targets()
            .context("invalid classpath target in project config")?,
    };

    let result = generate(&ws, &options)?;
    tracing::debug!(
        "{} source roots, {} libraries",
        result.classpath.src.len(),
        result.classpath.lib.len()
    );
    Ok(())
}
