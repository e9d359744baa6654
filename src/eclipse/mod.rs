//! Eclipse project metadata.

pub mod classpath;
pub mod project;

pub use classpath::{ClasspathDocument, ClasspathEntry, EntryKind};
pub use project::{ProjectDescriptor, DEFAULT_PROJECT_NAME};
