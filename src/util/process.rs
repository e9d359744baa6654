//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use thiserror::Error;

use crate::util::interrupt::{self, Interrupted};

/// Failure to run a child process to a successful exit.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started at all (missing executable,
    /// permission denied, ...).
    #[error("could not run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program ran but reported failure.
    #[error("`{command}` failed with {}", describe_exit(.code))]
    Failed { command: String, code: Option<i32> },

    /// Ctrl-C arrived while the program was running.
    #[error("`{command}` was interrupted")]
    Interrupted {
        command: String,
        #[source]
        source: Interrupted,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Run the command with stdout captured and stderr passed through.
    ///
    /// The exit status is not checked.
    pub fn exec(&self) -> Result<Output, ProcessError> {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        tracing::debug!("running `{}`", self.display_command());
        let output = cmd.output().map_err(|source| self.spawn_error(source))?;
        self.check_interrupt()?;
        Ok(output)
    }

    /// Run the command with captured stdout and require success.
    pub fn exec_and_check(&self) -> Result<Output, ProcessError> {
        let output = self.exec()?;
        if !output.status.success() {
            return Err(self.failed(output.status.code()));
        }
        Ok(output)
    }

    /// Run the command with inherited stdio and require success.
    pub fn status_and_check(&self) -> Result<(), ProcessError> {
        let mut cmd = self.build_command();

        tracing::debug!("running `{}`", self.display_command());
        let status = cmd.status().map_err(|source| self.spawn_error(source))?;
        self.check_interrupt()?;
        if !status.success() {
            return Err(self.failed(status.code()));
        }
        Ok(())
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    fn spawn_error(&self, source: io::Error) -> ProcessError {
        ProcessError::Spawn {
            program: self.program.display().to_string(),
            source,
        }
    }

    fn failed(&self, code: Option<i32>) -> ProcessError {
        ProcessError::Failed {
            command: self.display_command(),
            code,
        }
    }

    // A child killed by the terminal's SIGINT reports a plain failure, so
    // the flag takes precedence over the exit status.
    fn check_interrupt(&self) -> Result<(), ProcessError> {
        interrupt::check().map_err(|source| ProcessError::Interrupted {
            command: self.display_command(),
            source,
        })
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: impl AsRef<OsStr>) -> Option<PathBuf> {
    which::which(name).ok()
}
