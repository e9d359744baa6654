//! Implementation of `eclipse-project`.
//!
//! Steps, in order:
//! 1. ask Bazel for its output base
//! 2. write `.project`
//! 3. build the classpath collector, classify its output and write `.classpath`
//! 4. record the Bazel binary in `.primary_build_tool`
//! 5. build the main classpath target as a final check
//!
//! Files written before a failing step are left in place.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::label::Label;
use crate::core::targets::{runtime_classpath_file, ClasspathTargets};
use crate::core::{ClasspathSets, Workspace};
use crate::eclipse::{ClasspathDocument, ProjectDescriptor, DEFAULT_PROJECT_NAME};
use crate::util::bazel::{Bazel, DEFAULT_BAZEL};
use crate::util::fs::{read_lines, write_file};
use crate::util::interrupt;

/// Failures specific to project generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(
        "`{collector}` succeeded but did not produce `{}`",
        .path.display()
    )]
    ClasspathFileMissing { collector: Label, path: PathBuf },

    #[error("`{}` was not found on PATH", .program.display())]
    BazelNotFound { program: PathBuf },
}

/// Options for project generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Eclipse project name
    pub project_name: String,

    /// Bazel executable
    pub bazel: PathBuf,

    /// Classpath targets and their collector rules
    pub targets: ClasspathTargets,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            bazel: PathBuf::from(DEFAULT_BAZEL),
            targets: ClasspathTargets::default(),
        }
    }
}

/// What a successful run wrote.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub project_file: PathBuf,
    pub classpath_file: PathBuf,
    pub primary_build_tool_file: PathBuf,
    pub classpath: ClasspathSets,
}

/// Generate the Eclipse project for `ws`.
pub fn generate(ws: &Workspace, options: &GenerateOptions) -> Result<GenerateResult> {
    let bazel = Bazel::new(&options.bazel, ws.root());

    let external_base = query_external_output_base(&bazel)?;
    interrupt::check()?;

    let project_file = ws.project_file();
    emit_project_descriptor(&project_file, &options.project_name)?;
    interrupt::check()?;

    let entries = query_classpath(&bazel, ws, &options.targets, options.targets.main())?;
    let classpath = ClasspathSets::classify(&entries, &external_base);
    if classpath.is_empty() {
        tracing::warn!("`{}` has an empty classpath", options.targets.main());
    }
    let classpath_file = ws.classpath_file();
    emit_classpath_document(&classpath_file, &classpath, ws.root())?;
    interrupt::check()?;

    let primary_build_tool_file = ws.primary_build_tool_file();
    record_toolchain(&primary_build_tool_file, &bazel)?;
    interrupt::check()?;

    bazel
        .build(options.targets.main())
        .with_context(|| format!("failed to build `{}`", options.targets.main()))?;

    Ok(GenerateResult {
        project_file,
        classpath_file,
        primary_build_tool_file,
        classpath,
    })
}

/// Bazel's output base, used to make `external/` paths absolute.
pub fn query_external_output_base(bazel: &Bazel) -> Result<PathBuf> {
    let base = bazel
        .output_base()
        .context("failed to query the Bazel output base")?;
    tracing::debug!("output base: {}", base.display());
    Ok(base)
}

/// Build the collector for `target` and read the classpath it wrote.
pub fn query_classpath(
    bazel: &Bazel,
    ws: &Workspace,
    targets: &ClasspathTargets,
    target: &Label,
) -> Result<Vec<String>> {
    let collector = targets.collector(target)?;
    bazel
        .build(collector)
        .with_context(|| format!("failed to build classpath collector `{collector}`"))?;

    let path = runtime_classpath_file(&ws.bazel_bin(), collector);
    read_classpath_file(&path, collector)
}

/// Read a collector's output, one entry per line. Blank lines are skipped.
pub fn read_classpath_file(path: &Path, collector: &Label) -> Result<Vec<String>> {
    match read_lines(path) {
        Ok(lines) => Ok(lines),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(GenerateError::ClasspathFileMissing {
            collector: collector.clone(),
            path: path.to_path_buf(),
        }
        .into()),
        Err(e) => Err(e).with_context(|| format!("failed to read file: {}", path.display())),
    }
}

/// Write `.project`.
pub fn emit_project_descriptor(path: &Path, name: &str) -> Result<()> {
    ProjectDescriptor::new(name).write(path)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

/// Write `.classpath` for the collected entries.
pub fn emit_classpath_document(path: &Path, sets: &ClasspathSets, root: &Path) -> Result<()> {
    let doc = ClasspathDocument::from_sets(sets, root);
    doc.write(path)?;
    tracing::info!("wrote {} ({} entries)", path.display(), doc.entries().len());
    Ok(())
}

/// Write `.primary_build_tool` so other tooling can find the same Bazel.
pub fn record_toolchain(path: &Path, bazel: &Bazel) -> Result<()> {
    let located = bazel.locate().ok_or_else(|| GenerateError::BazelNotFound {
        program: bazel.program().to_path_buf(),
    })?;
    let search_path = std::env::var_os("PATH").unwrap_or_default();

    let record = format!(
        "bazel={}\nPATH={}\n",
        located.display(),
        search_path.to_string_lossy()
    );
    write_file(path, &record)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
