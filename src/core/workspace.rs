//! Workspace - the Bazel source tree the tools operate on.
//!
//! A workspace is identified by a `WORKSPACE` marker file at its root and
//! provides centralized access to the paths the generator reads and writes.

use std::path::{Path, PathBuf};

use thiserror::Error;


/// Marker file identifying the workspace root.
pub const WORKSPACE_MARKER: &str = "WORKSPACE";

/// Eclipse project description file.
pub const PROJECT_FILE: &str = ".project";

/// Eclipse classpath file.
pub const CLASSPATH_FILE: &str = ".classpath";

/// Record of the Bazel binary used to generate the project.
pub const PRIMARY_BUILD_TOOL_FILE: &str = ".primary_build_tool";

/// Generator configuration, relative to the workspace root.
pub const CONFIG_FILE: &str = "tools/eclipse/project.toml";

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error(
        "could not find `WORKSPACE` in `{}` or any parent directory",
        .start.display()
    )]
    NotFound { start: PathBuf },
}

/// A discovered workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Use `root` as the workspace root without looking for the marker.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace { root: root.into() }
    }

    /// Find the workspace containing `start`.
    pub fn discover(start: &Path) -> Result<Self, WorkspaceError> {
        find_workspace_root(start).map(Workspace::new)
    }

    /// Get the workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the `.project` path.
    pub fn project_file(&self) -> PathBuf {
        self.root.join(PROJECT_FILE)
    }

    /// Get the `.classpath` path.
    pub fn classpath_file(&self) -> PathBuf {
        self.root.join(CLASSPATH_FILE)
    }

    /// Get the `.primary_build_tool` path.
    pub fn primary_build_tool_file(&self) -> PathBuf {
        self.root.join(PRIMARY_BUILD_TOOL_FILE)
    }

    /// Get the default generator config path.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Get the `bazel-bin` convenience symlink.
    pub fn bazel_bin(&self) -> PathBuf {
        self.root.join("bazel-bin")
    }
}

/// Walk upward from `start` to the first directory containing the marker.
///
/// The walk ends at the filesystem root. A `start` that does not exist
/// is not found.
pub fn find_workspace_root(start: &Path) -> Result<PathBuf, WorkspaceError> {
    let not_found = || WorkspaceError::NotFound {
        start: start.to_path_buf(),
    };

    let mut current = start.canonicalize().map_err(|_| not_found())?;
    loop {
        if current.join(WORKSPACE_MARKER).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(not_found());
        }
    }
}
