//! Bazel invocations.

use std::path::{Path, PathBuf};

use crate::core::label::Label;
use crate::util::process::{find_executable, ProcessBuilder, ProcessError};

/// Default Bazel executable name.
pub const DEFAULT_BAZEL: &str = "bazel";

/// A Bazel client bound to a workspace.
#[derive(Debug, Clone)]
pub struct Bazel {
    program: PathBuf,
    workspace: PathBuf,
}

impl Bazel {
    /// Create a client running `program` inside `workspace`.
    ///
    /// A relative `program` containing a separator is anchored to the
    /// current directory; commands themselves run from `workspace`. A bare
    /// name is left for the `PATH` lookup.
    pub fn new(program: impl Into<PathBuf>, workspace: impl Into<PathBuf>) -> Self {
        Bazel {
            program: anchor_program(program.into()),
            workspace: workspace.into(),
        }
    }

    /// The executable, anchored to the invocation directory when relative.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Resolve the executable on `PATH`.
    pub fn locate(&self) -> Option<PathBuf> {
        find_executable(&self.program)
    }

    fn command(&self, subcommand: &str) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .arg(subcommand)
            .cwd(&self.workspace)
    }

    /// Run `bazel info <key>` and return its trimmed output.
    pub fn info(&self, key: &str) -> Result<String, ProcessError> {
        let output = self.command("info").arg(key).exec_and_check()?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Bazel's output base, which holds the `external/` repositories.
    pub fn output_base(&self) -> Result<PathBuf, ProcessError> {
        self.info("output_base").map(PathBuf::from)
    }

    /// Run `bazel build <target>` with output passed through to the terminal.
    pub fn build(&self, target: &Label) -> Result<(), ProcessError> {
        self.command("build")
            .arg(target.to_string())
            .status_and_check()
    }
}

fn anchor_program(program: PathBuf) -> PathBuf {
    if program.is_absolute() || program.components().count() < 2 {
        return program;
    }
    match std::path::absolute(&program) {
        Ok(anchored) => anchored,
        Err(_) => program,
    }
}
