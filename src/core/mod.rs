//! Core data structures.
//!
//! - Bazel labels and the classpath target mapping
//! - Workspace discovery and well-known paths
//! - Classpath entry classification

pub mod classpath;
pub mod label;
pub mod targets;
pub mod workspace;

pub use classpath::ClasspathSets;
pub use label::{Label, LabelError};
pub use targets::{ClasspathTargets, TargetError};
pub use workspace::{find_workspace_root, Workspace, WorkspaceError, WORKSPACE_MARKER};
