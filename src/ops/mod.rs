//! High-level operations.
//!
//! This module contains the implementation of the command-line tools.

pub mod eclipse_project;
pub mod workspace_status;

pub use eclipse_project::{generate, GenerateError, GenerateOptions, GenerateResult};
pub use workspace_status::{revision, stamp_line, RevisionError};
