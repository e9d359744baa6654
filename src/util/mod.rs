//! Shared utilities

pub mod bazel;
pub mod config;
pub mod fs;
pub mod interrupt;
pub mod logging;
pub mod process;
pub mod xml;

pub use bazel::Bazel;
pub use config::ProjectConfig;
pub use interrupt::Interrupted;
pub use process::{ProcessBuilder, ProcessError};
