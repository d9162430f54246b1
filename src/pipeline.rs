// src/pipeline.rs
//! One run: list, scan, select, expand, render.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::graph::{self, DependencyGraph};
use crate::matcher::{self, MatchRecord};
use crate::render::{self, RenderOptions};
use crate::scan::{self, FsEdgeSource};
use crate::select::Selector;

/// The files of a finished run and the document rendered from them.
#[derive(Debug, Clone)]
pub struct ContextSlice {
    pub matches: Vec<MatchRecord>,
    pub entries: Vec<PathBuf>,
    pub files: BTreeSet<PathBuf>,
    pub document: String,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Rendered(ContextSlice),
    /// No file contained the keyword.
    NoMatches,
    /// The selector returned nothing.
    NothingSelected,
}

/// Runs the whole pipeline for `config`.
///
/// # Errors
/// Returns an error on invalid input (empty keyword, missing root) or if a file
/// cannot be read during the scan, lazy discovery or rendering.
pub fn run(config: &Config, selector: &mut dyn Selector) -> Result<Outcome> {
    config.validate()?;

    let root = config.root_dir();
    let files = discovery::list_source_files(&root, &config.prune)?;

    let matcher = matcher::build(config.matcher, &config.keyword, config.mode)?;
    let mut graph = DependencyGraph::new();
    let matches = scan::scan(&files, matcher.as_ref(), &mut graph)?;
    if matches.is_empty() {
        return Ok(Outcome::NoMatches);
    }

    let selected = selector.select(&matches)?;
    if selected.is_empty() {
        return Ok(Outcome::NothingSelected);
    }

    let entries = expand_entries(&graph, selected, config.upstream);
    let files = graph::descendants_lazy(&mut graph, &FsEdgeSource, &entries, config.max_depth)?;
    debug!(
        entries = entries.len(),
        files = files.len(),
        nodes = graph.node_count(),
        "context slice"
    );

    let opts = RenderOptions {
        base: config.base.clone(),
        max_lines: config.max_lines,
    };
    let document = render::render(&files, config.format, &opts)?;

    Ok(Outcome::Rendered(ContextSlice {
        matches,
        entries,
        files,
        document,
    }))
}

/// Selected files first, then their ancestors when `upstream` is set.
fn expand_entries(graph: &DependencyGraph, selected: Vec<PathBuf>, upstream: bool) -> Vec<PathBuf> {
    if !upstream {
        return selected;
    }
    // Ancestors never contain a seed, so no dedup is needed.
    let parents = graph::ancestors(graph, &selected);
    let mut entries = selected;
    entries.extend(parents);
    entries
}
