//! Logical classpath targets and the collector rules that materialize them.
//!
//! A collector rule writes `bazel-bin/<package>/<name>.runtime_classpath`,
//! one classpath entry per line.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::label::Label;

/// Package holding the Eclipse tooling rules.
pub const ECLIPSE_PACKAGE: &str = "tools/eclipse";

/// Name of the logical classpath target built as a final check.
pub const MAIN_TARGET_NAME: &str = "classpath";

/// Name of the collector rule for the main classpath.
pub const MAIN_COLLECTOR_NAME: &str = "main_classpath_collect";

/// Extension of the file a collector rule writes.
pub const RUNTIME_CLASSPATH_EXTENSION: &str = "runtime_classpath";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("no classpath collector is configured for `{0}`")]
    Unknown(Label),
}

/// Mapping from logical targets to collector rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathTargets {
    main: Label,
    collectors: BTreeMap<Label, Label>,
}

impl ClasspathTargets {
    /// Create an empty mapping whose main target is `main`.
    pub fn new(main: Label) -> Self {
        ClasspathTargets {
            main,
            collectors: BTreeMap::new(),
        }
    }

    /// Register the collector rule for a logical target.
    pub fn with_collector(mut self, target: Label, collector: Label) -> Self {
        self.collectors.insert(target, collector);
        self
    }

    /// The logical target the generator works on.
    pub fn main(&self) -> &Label {
        &self.main
    }

    /// Look up the collector rule for a logical target.
    pub fn collector(&self, target: &Label) -> Result<&Label, TargetError> {
        self.collectors
            .get(target)
            .ok_or_else(|| TargetError::Unknown(target.clone()))
    }
}

impl Default for ClasspathTargets {
    fn default() -> Self {
        let main = Label::new(ECLIPSE_PACKAGE, MAIN_TARGET_NAME);
        ClasspathTargets::new(main.clone())
            .with_collector(main, Label::new(ECLIPSE_PACKAGE, MAIN_COLLECTOR_NAME))
    }
}

/// Location of the file written by `collector` under `bazel_bin`.
pub fn runtime_classpath_file(bazel_bin: &Path, collector: &Label) -> PathBuf {
    bazel_bin.join(collector.package()).join(format!(
        "{}.{}",
        collector.name(),
        RUNTIME_CLASSPATH_EXTENSION
    ))
}
