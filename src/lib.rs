//! Build tooling for Bazel-built Java plugins.
//!
//! Two tools live here:
//! - `eclipse-project` generates Eclipse `.project` and `.classpath` files
//!   from the runtime classpath Bazel reports
//! - `workspace-status` prints the git revision for build stamping

pub mod core;
pub mod eclipse;
pub mod ops;
pub mod util;

pub use core::{ClasspathSets, ClasspathTargets, Label, Workspace};
pub use eclipse::{ClasspathDocument, ProjectDescriptor};
