//! Generator configuration file.
//!
//! The file lives at `tools/eclipse/project.toml` in the workspace (or
//! wherever `--config` points) and is optional:
//!
//! ```toml
//! name = "my-plugin"
//! main = "//tools/eclipse:classpath"
//!
//! [targets]
//! "//tools/eclipse:classpath" = "//tools/eclipse:main_classpath_collect"
//! ```
//!
//! Command-line flags take precedence over the file, which takes
//! precedence over the built-in defaults.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::label::{Label, LabelError};
use crate::core::targets::{
    ClasspathTargets, ECLIPSE_PACKAGE, MAIN_COLLECTOR_NAME, MAIN_TARGET_NAME,
};

/// Contents of `project.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Eclipse project name.
    pub name: Option<String>,

    /// Logical classpath target to generate the project from.
    pub main: Option<String>,

    /// Logical target label -> collector rule label.
    pub targets: BTreeMap<String, String>,
}

impl ProjectConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read project config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse project config: {}", path.display()))
    }

    /// Load configuration, falling back to defaults if the file doesn't exist.
    ///
    /// A file that exists but doesn't parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no project config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Build the classpath target mapping.
    ///
    /// Without a `[targets]` table the built-in collector mapping is used.
    pub fn classpath_targets(&self) -> Result<ClasspathTargets, LabelError> {
        let main = match &self.main {
            Some(main) => main.parse::<Label>()?,
            None => Label::new(ECLIPSE_PACKAGE, MAIN_TARGET_NAME),
        };

        let mut targets = ClasspathTargets::new(main);
        if self.targets.is_empty() {
            return Ok(targets.with_collector(
                Label::new(ECLIPSE_PACKAGE, MAIN_TARGET_NAME),
                Label::new(ECLIPSE_PACKAGE, MAIN_COLLECTOR_NAME),
            ));
        }

        for (target, collector) in &self.targets {
            targets = targets.with_collector(target.parse()?, collector.parse()?);
        }
        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = ProjectConfig::load_or_default(&tmp.path().join("project.toml")).unwrap();

        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.classpath_targets().unwrap(), ClasspathTargets::default());
    }

    #[test]
    fn test_parses_name_and_targets() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("project.toml");
        std::fs::write(
            &path,
            r#"
name = "oauth"
main = "//ide:classpath"

[targets]
"//ide:classpath" = "//ide:collect"
"#,
        )
        .unwrap();

        let config = ProjectConfig::load_or_default(&path).unwrap();
        assert_eq!(config.name.as_deref(), Some("oauth"));

        let targets = config.classpath_targets().unwrap();
        assert_eq!(targets.main().to_string(), "//ide:classpath");
        assert_eq!(
            targets.collector(targets.main()).unwrap().to_string(),
            "//ide:collect"
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("project.toml");
        std::fs::write(&path, "name = [").unwrap();

        let err = ProjectConfig::load_or_default(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse project config"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("project.toml");
        std::fs::write(&path, "nmae = \"typo\"\n").unwrap();

        assert!(ProjectConfig::load(&path).is_err());
    }

    #[test]
    fn test_invalid_label() {
        let config = ProjectConfig {
            main: Some("tools/eclipse:classpath".to_string()),
            ..ProjectConfig::default()
        };

        assert!(matches!(
            config.classpath_targets(),
            Err(LabelError::NotAbsolute(_))
        ));
    }
}
