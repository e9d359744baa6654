//! The `.project` file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::util::fs::write_file;
use crate::util::xml::XmlWriter;

/// Project name used when none is configured.
pub const DEFAULT_PROJECT_NAME: &str = "gerrit-oauth-provider";

const JAVA_BUILDER: &str = "org.eclipse.jdt.core.javabuilder";
const JAVA_NATURE: &str = "org.eclipse.jdt.core.javanature";

/// A Java project description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        ProjectDescriptor { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the document.
    ///
    /// The closing `</projectDescription>` is followed directly by `\n`,
    /// without the four trailing spaces older generators left on that line.
    pub fn to_xml(&self) -> quick_xml::Result<String> {
        let mut xml = XmlWriter::new(b' ', 2)?;
        xml.start("projectDescription")?;
        xml.text_element("name", &self.name)?;

        xml.start("buildSpec")?;
        xml.start("buildCommand")?;
        xml.text_element("name", JAVA_BUILDER)?;
        xml.end("buildCommand")?;
        xml.end("buildSpec")?;

        xml.start("natures")?;
        xml.text_element("nature", JAVA_NATURE)?;
        xml.end("natures")?;

        xml.end("projectDescription")?;
        Ok(xml.finish())
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let xml = self
            .to_xml()
            .with_context(|| format!("failed to render {}", path.display()))?;
        write_file(path, &xml)
    }
}

impl Default for ProjectDescriptor {
    fn default() -> Self {
        ProjectDescriptor::new(DEFAULT_PROJECT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_document() {
        let xml = ProjectDescriptor::default().to_xml().unwrap();

        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<projectDescription>
  <name>gerrit-oauth-provider</name>
  <buildSpec>
    <buildCommand>
      <name>org.eclipse.jdt.core.javabuilder</name>
    </buildCommand>
  </buildSpec>
  <natures>
    <nature>org.eclipse.jdt.core.javanature</nature>
  </natures>
</projectDescription>
"#
        );
    }

    #[test]
    fn test_name_is_escaped() {
        let xml = ProjectDescriptor::new("a<b>&c").to_xml().unwrap();
        assert!(xml.contains("<name>a&lt;b&gt;&amp;c</name>"));
    }

    #[test]
    fn test_write_overwrites() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(".project");
        std::fs::write(&path, "stale").unwrap();

        ProjectDescriptor::new("demo").write(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<name>demo</name>"));
        assert!(!written.contains("stale"));
    }
}
