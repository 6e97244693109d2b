//! Locating and reading element streams on disk.
//!
//! Parsers export either one JSON array of elements or newline-delimited JSON with one element
//! per line. Both are accepted; records are returned raw so the builder can validate them all
//! before any tree is built.

use crate::builder::{BuildOptions, BuildOutput, TreeBuilder};
use crate::element::RawElement;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parse an element stream from text.
///
/// Handles both array format and newline-delimited JSON (NDJSON) format.
///
/// # Errors
///
/// Returns an error if the text is neither a JSON array of elements nor JSON lines.
pub fn parse_elements(json_str: &str) -> Result<Vec<RawElement>> {
    match serde_json::from_str::<Vec<RawElement>>(json_str) {
        Ok(elements) => Ok(elements),
        // Starts like an array but is not a valid one.
        Err(e) if json_str.trim_start().starts_with('[') => Err(Error::Json(e)),
        Err(_) => json_str
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str::<RawElement>(line)
                    .map_err(|source| Error::JsonLine { line: i + 1, source })
            })
            .collect(),
    }
}

/// Read and parse the element stream stored at `path`.
///
/// # Errors
///
/// Returns an error naming `path` if the file cannot be read or does not hold an element stream.
pub fn load_elements(path: &Path) -> Result<Vec<RawElement>> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let elements = parse_elements(&contents).map_err(|e| Error::in_file(path, e))?;
    debug!(path = %path.display(), elements = elements.len(), "loaded element stream");
    Ok(elements)
}

/// Load the element stream at `path` and rebuild its section tree.
///
/// # Errors
///
/// Returns an error naming `path` if the file cannot be loaded or holds a record the builder
/// rejects.
pub fn build_file(path: &Path, options: &BuildOptions) -> Result<BuildOutput> {
    let elements = load_elements(path)?;
    TreeBuilder::build_raw(options, elements).map_err(|e| Error::in_file(path, e))
}

/// Expand `paths` into the element stream files to process.
///
/// Files named explicitly are kept whatever their suffix; directories are searched
/// recursively for files whose extension is in `extensions`. Results are sorted per directory
/// so output order does not depend on the file system.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(&path, extensions, &mut documents)?;
        } else {
            documents.push(path);
        }
    }
    Ok(documents)
}

fn collect_dir(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_dir(&path, extensions, out)?;
        } else if has_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
