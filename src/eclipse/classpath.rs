//! The `.classpath` file.
//!
//! Entries are emitted in a fixed order: source folders, libraries, the
//! JRE container and finally the output folder. Source folders and source
//! jars are only listed when they exist on disk.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::classpath::ClasspathSets;
use crate::util::fs::write_file;
use crate::util::xml::XmlWriter;

/// Java SE 1.8 execution environment.
pub const JRE_CONTAINER: &str = "org.eclipse.jdt.launching.JRE_CONTAINER/\
     org.eclipse.jdt.internal.debug.ui.launcher.StandardVMType/\
     JavaSE-1.8";

/// Default output folder for compiled classes.
pub const OUTPUT_DIR: &str = "eclipse-out/classes";

/// Output folder for sources under `lib/`.
pub const LIB_OUTPUT_DIR: &str = "eclipse-out/lib";

/// Output folder for test sources.
pub const TEST_OUTPUT_DIR: &str = "eclipse-out/test";

// Eclipse tries to compile BUILD files found in source folders
// (https://github.com/bazelbuild/bazel/issues/1083).
const BUILD_FILE_EXCLUSION: &str = "**/BUILD";

const SOURCE_ENVIRONMENTS: [&str; 2] = ["main", "test"];
const SOURCE_KINDS: [&str; 2] = ["java", "resources"];

/// A jar unpacked from an external repository, whose sources sit in a
/// sibling `src/<name>-src.jar`.
static EXTERNAL_JAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*/external/[^/]+)/jar/(.*)[.]jar").expect("valid regex")
});

/// Kind of a classpath entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Src,
    Lib,
    Con,
    Output,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Src => "src",
            EntryKind::Lib => "lib",
            EntryKind::Con => "con",
            EntryKind::Output => "output",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `classpathentry` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathEntry {
    pub kind: EntryKind,
    pub path: String,
    pub sourcepath: Option<String>,
    pub output: Option<String>,
    pub exported: bool,
}

impl ClasspathEntry {
    fn new(kind: EntryKind, path: impl Into<String>) -> Self {
        ClasspathEntry {
            kind,
            path: path.into(),
            sourcepath: None,
            output: None,
            exported: false,
        }
    }

    /// A source folder.
    pub fn src(path: impl Into<String>, output: Option<String>) -> Self {
        ClasspathEntry {
            output,
            ..Self::new(EntryKind::Src, path)
        }
    }

    /// A library jar.
    pub fn lib(path: impl Into<String>, sourcepath: Option<String>) -> Self {
        ClasspathEntry {
            sourcepath,
            ..Self::new(EntryKind::Lib, path)
        }
    }

    /// A classpath container.
    pub fn container(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Con, path)
    }

    /// The build output folder.
    pub fn output(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, path)
    }

    /// Export the entry to dependent projects.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Attributes in the order Eclipse writes them.
    fn attributes(&self) -> Vec<(&str, &str)> {
        let mut attrs = vec![("kind", self.kind.as_str())];
        if self.kind == EntryKind::Src {
            attrs.push(("excluding", BUILD_FILE_EXCLUSION));
        }
        attrs.push(("path", self.path.as_str()));
        if let Some(ref sourcepath) = self.sourcepath {
            attrs.push(("sourcepath", sourcepath.as_str()));
        }
        if let Some(ref output) = self.output {
            attrs.push(("output", output.as_str()));
        }
        if self.exported {
            attrs.push(("exported", "true"));
        }
        attrs
    }
}

/// An ordered `.classpath` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClasspathDocument {
    entries: Vec<ClasspathEntry>,
}

impl ClasspathDocument {
    /// Lay out entries for the collected sets.
    ///
    /// Relative paths are probed against `root`.
    pub fn from_sets(sets: &ClasspathSets, root: &Path) -> Self {
        let mut doc = ClasspathDocument::default();

        for src in &sets.src {
            doc.push_source_root(src, root);
        }

        for jar in &sets.lib {
            let sourcepath = source_jar(jar).filter(|p| root.join(p).exists());
            doc.push(ClasspathEntry::lib(jar.as_str(), sourcepath));
        }

        doc.push(ClasspathEntry::container(JRE_CONTAINER));
        doc.push(ClasspathEntry::output(OUTPUT_DIR));
        doc
    }

    fn push_source_root(&mut self, src: &str, root: &Path) {
        let out = src.starts_with("lib/").then_some(LIB_OUTPUT_DIR);

        let flat = join(src, &["java"]);
        if root.join(&flat).exists() {
            self.push(ClasspathEntry::src(flat, out.map(str::to_string)));
            return;
        }

        for env in SOURCE_ENVIRONMENTS {
            let output = match out {
                Some(out) => Some(format!("{out}/{env}")),
                None if env == "test" => Some(TEST_OUTPUT_DIR.to_string()),
                None => None,
            };

            for kind in SOURCE_KINDS {
                let folder = join(src, &["src", env, kind]);
                if root.join(&folder).exists() {
                    self.push(ClasspathEntry::src(folder, output.clone()));
                }
            }
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: ClasspathEntry) {
        self.entries.push(entry);
    }

    /// Get the entries in document order.
    pub fn entries(&self) -> &[ClasspathEntry] {
        &self.entries
    }

    /// Render the document.
    pub fn to_xml(&self) -> quick_xml::Result<String> {
        let mut xml = XmlWriter::new(b'\t', 1)?;
        xml.start("classpath")?;
        for entry in &self.entries {
            xml.empty("classpathentry", &entry.attributes())?;
        }
        xml.end("classpath")?;
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

/// Candidate source jar for a library jar unpacked from an external repository.
pub fn source_jar(jar: &str) -> Option<String> {
    let caps = EXTERNAL_JAR.captures(jar)?;
    let name = format!("{}-src.jar", &caps[2]);
    Some(join(&caps[1], &["src", name.as_str()]))
}

fn join(base: &str, parts: &[&str]) -> String {
    let mut path = Path::new(base).to_path_buf();
    for part in parts {
        path.push(part);
    }
    path.to_string_lossy().into_owned()
}
