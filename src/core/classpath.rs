//! Classification of runtime classpath entries reported by Bazel.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Jar of a `java_library` built in this workspace.
static LOCAL_JAVA_LIBRARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^bazel-out/local-fastbuild/bin/lib[^/]+[.]jar$").expect("valid regex")
});

/// Source root standing in for every locally built library.
pub const LOCAL_SOURCE_ROOT: &str = ".";

/// Prefix of paths living under Bazel's output base.
pub const EXTERNAL_PREFIX: &str = "external";

/// Source roots and library jars collected from a classpath.
///
/// Both sets are ordered so generated files are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClasspathSets {
    /// Source roots, relative to the workspace root.
    pub src: BTreeSet<String>,

    /// Library jars. External jars are made absolute.
    pub lib: BTreeSet<String>,
}

impl ClasspathSets {
    /// Create empty sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every entry of a classpath.
    pub fn classify<I, S>(paths: I, external_base: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sets = ClasspathSets::new();
        for path in paths {
            sets.insert(path.as_ref(), external_base);
        }
        sets
    }

    /// Classify a single entry.
    ///
    /// Locally built libraries collapse into [`LOCAL_SOURCE_ROOT`];
    /// anything else is a library, rebased onto `external_base` when it
    /// lives under `external/` so the result works from any directory.
    pub fn insert(&mut self, path: &str, external_base: &Path) {
        if LOCAL_JAVA_LIBRARY.is_match(path) {
            self.src.insert(LOCAL_SOURCE_ROOT.to_string());
        } else if path.starts_with(EXTERNAL_PREFIX) {
            self.lib
                .insert(external_base.join(path).to_string_lossy().into_owned());
        } else {
            self.lib.insert(path.to_string());
        }
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.src.is_empty() && self.lib.is_empty()
    }
}
