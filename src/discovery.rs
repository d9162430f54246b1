// src/discovery.rs
use crate::error::{ContextError, Result};
use crate::graph::resolver::normalize;
use crate::lang;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Directory names skipped when no config overrides them.
pub const DEFAULT_PRUNE: &[&str] = &["node_modules", ".git"];

/// Recursively lists source files under `root`, sorted and normalized.
///
/// Directories named in `prune` are not entered.
///
/// # Errors
/// Returns an error if `root` is not a directory, or if any entry under it
/// cannot be read. A partial listing is never returned.
pub fn list_source_files(root: &Path, prune: &[String]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ContextError::RootNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(e, prune));

    let mut paths = accumulate_walker(walker)?;
    paths.sort();
    debug!(root = %root.display(), files = paths.len(), "discovery");
    Ok(paths)
}

fn should_prune(entry: &walkdir::DirEntry, prune: &[String]) -> bool {
    entry.file_type().is_dir() && prune.iter().any(|p| entry.file_name() == p.as_str())
}

// walkdir errors carry the offending path in their message.
fn accumulate_walker<I>(walker: I) -> Result<Vec<PathBuf>>
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    for item in walker {
        let entry = item?;
        if entry.file_type().is_file() && lang::is_source_file(entry.path()) {
            paths.push(normalize(entry.path()));
        }
    }
    Ok(paths)
}
