//! Bazel target labels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label `{0}` must start with `//`")]
    NotAbsolute(String),

    #[error("label `{0}` has an empty target name")]
    EmptyName(String),
}

/// An absolute label in the main repository, `//package:name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    package: String,
    name: String,
}

impl Label {
    /// Create a label from its parts.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Label {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Package path, e.g. `tools/eclipse`.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Target name, e.g. `main_classpath_collect`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("//")
            .ok_or_else(|| LabelError::NotAbsolute(s.to_string()))?;

        let (package, name) = match rest.split_once(':') {
            Some((package, name)) => (package, name),
            // `//foo/bar` is shorthand for `//foo/bar:bar`
            None => (rest, rest.rsplit('/').next().unwrap_or(rest)),
        };

        if name.is_empty() {
            return Err(LabelError::EmptyName(s.to_string()));
        }

        Ok(Label::new(package, name))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}:{}", self.package, self.name)
    }
}
