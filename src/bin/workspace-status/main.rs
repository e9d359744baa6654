//! workspace-status - print build stamp keys for `--workspace_status_command`

use clap::Parser;

use buildtools::ops::{revision, stamp_line};
use buildtools::util::logging;

/// Print the git revision as a Bazel workspace status line
#[derive(Parser)]
#[command(name = "workspace-status")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    Cli::parse();
    logging::init("buildtools=warn");

    match revision() {
        Ok(revision) => println!("{}", stamp_line(&revision)),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
