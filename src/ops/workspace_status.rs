//! Implementation of `workspace-status`.
//!
//! Bazel runs the binary through `--workspace_status_command` and reads
//! `KEY value` lines from its stdout. A non-zero exit discards the output.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::util::process::{ProcessBuilder, ProcessError};

/// Stamp key carrying the revision.
pub const LABEL_KEY: &str = "STABLE_BUILD_OAUTH_LABEL";

const GIT: &str = "git";

/// Describe HEAD even without tags, preferring `v<digit>...` release tags,
/// and flag uncommitted changes.
const DESCRIBE_ARGS: [&str; 5] = ["describe", "--always", "--match", "v[0-9].*", "--dirty"];

#[derive(Debug, Error)]
pub enum RevisionError {
    /// git is not installed or could not be started.
    #[error("could not invoke git: {0}")]
    Invoke(#[source] io::Error),

    /// git ran and failed, e.g. outside a repository.
    #[error("error using git: {0}")]
    Git(#[source] ProcessError),
}

impl From<ProcessError> for RevisionError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::Spawn { source, .. } => RevisionError::Invoke(source),
            other => RevisionError::Git(other),
        }
    }
}

/// Describe the revision checked out in the current directory.
pub fn revision() -> Result<String, RevisionError> {
    describe(ProcessBuilder::new(GIT))
}

/// Describe the revision checked out in `dir`.
pub fn revision_in(dir: &Path) -> Result<String, RevisionError> {
    describe(ProcessBuilder::new(GIT).cwd(dir))
}

fn describe(git: ProcessBuilder) -> Result<String, RevisionError> {
    let output = git.args(DESCRIBE_ARGS).exec_and_check()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// The status line Bazel reads.
pub fn stamp_line(revision: &str) -> String {
    format!("{LABEL_KEY} {revision}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_line() {
        assert_eq!(
            stamp_line("v1.2.3-4-gabcdef-dirty"),
            "STABLE_BUILD_OAUTH_LABEL v1.2.3-4-gabcdef-dirty"
        );
    }

    #[test]
    fn test_spawn_failure_is_invoke_error() {
        let err = RevisionError::from(ProcessError::Spawn {
            program: "git".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        });

        assert!(matches!(err, RevisionError::Invoke(_)));
        assert_eq!(
            err.to_string(),
            "could not invoke git: No such file or directory"
        );
    }

    #[test]
    fn test_exit_failure_is_git_error() {
        let err = RevisionError::from(ProcessError::Failed {
            command: "git describe --always --match v[0-9].* --dirty".to_string(),
            code: Some(128),
        });

        assert!(matches!(err, RevisionError::Git(_)));
        assert_eq!(
            err.to_string(),
            "error using git: `git describe --always --match v[0-9].* --dirty` failed with exit code 128"
        );
    }

    #[test]
    fn test_missing_directory_cannot_invoke() {
        // current_dir on a missing directory fails at spawn time.
        let err = revision_in(Path::new("/definitely/not/a/dir/5b9a")).unwrap_err();
        assert!(matches!(err, RevisionError::Invoke(_)));
    }
}
