//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Generate Eclipse project files from Bazel's view of the classpath
#[derive(Parser)]
#[command(name = "eclipse-project")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the generated project [default: gerrit-oauth-provider]
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to search upward for WORKSPACE (default: cwd, not the location of this binary)
    #[arg(long, env = "ECLIPSE_PROJECT_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Generator config (defaults to tools/eclipse/project.toml in the workspace)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bazel executable
    #[arg(long, env = "BAZEL", default_value = "bazel")]
    pub bazel: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
