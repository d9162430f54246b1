// src/render/mod.rs
//! Rendering a file set into the output document.

mod json;
mod markdown;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Paths under this directory are shown relative to it.
    pub base: PathBuf,
    /// First N lines of each file; 0 keeps whole files.
    pub max_lines: usize,
}

/// Renders `files` in `format`.
///
/// # Errors
/// Returns an error if a file cannot be read (Markdown) or serialization fails (JSON).
pub fn render(files: &BTreeSet<PathBuf>, format: OutputFormat, opts: &RenderOptions) -> Result<String> {
    let mut entries: Vec<(String, &Path)> = files
        .iter()
        .map(|f| (display_path(f, &opts.base), f.as_path()))
        .collect();
    entries.sort();

    match format {
        OutputFormat::Json => json::render(&entries),
        OutputFormat::Markdown => markdown::render(&entries, opts.max_lines),
    }
}

/// `file` relative to `base` when it lives under it, with `/` separators.
#[must_use]
pub fn display_path(file: &Path, base: &Path) -> String {
    let shown = file.strip_prefix(base).unwrap_or(file);
    shown.to_string_lossy().replace('\\', "/")
}
