//! Filesystem helpers for generated files.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// Replace `path` with `contents`, creating missing parent directories.
///
/// The write is not atomic: a failure part way can leave a truncated file.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    tracing::debug!("{} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Non-empty lines of a text file, without line terminators.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
