// src/scan.rs
//! The scan phase: match every file and record its import edges.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{ContextError, Result};
use crate::graph::{imports, resolver, DependencyGraph, EdgeSource};
use crate::matcher::{MatchRecord, Matcher};

struct FileScan {
    path: PathBuf,
    lines: Vec<usize>,
    deps: Vec<PathBuf>,
}

/// Scans `files` in parallel, returning match records in input order.
///
/// Every scanned file becomes a graph node with its resolved imports as edges.
/// Edges are inserted on the calling thread after all reads finish.
///
/// # Errors
/// Returns an error naming the first file that could not be read.
pub fn scan(
    files: &[PathBuf],
    matcher: &dyn Matcher,
    graph: &mut DependencyGraph,
) -> Result<Vec<MatchRecord>> {
    let scans = files
        .par_iter()
        .map(|path| scan_file(path, matcher))
        .collect::<Result<Vec<_>>>()?;

    let mut matches = Vec::new();
    for FileScan { path, lines, deps } in scans {
        for dep in &deps {
            graph.add_edge(&path, dep);
        }
        graph.mark_scanned(&path);
        if !lines.is_empty() {
            matches.push(MatchRecord { file: path, lines });
        }
    }

    debug!(
        files = files.len(),
        matched = matches.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "scan complete"
    );
    Ok(matches)
}

fn scan_file(path: &Path, matcher: &dyn Matcher) -> Result<FileScan> {
    let content = read(path)?;
    Ok(FileScan {
        path: path.to_path_buf(),
        lines: matcher.find_lines(path, &content),
        deps: dependencies_of(path, &content),
    })
}

/// Resolved, deduplicated dependencies of `path` given its text.
#[must_use]
pub fn dependencies_of(path: &Path, content: &str) -> Vec<PathBuf> {
    let mut deps: Vec<PathBuf> = imports::extract(content)
        .iter()
        .filter_map(|spec| {
            let resolved = resolver::resolve(path, spec);
            if resolved.is_none() {
                trace!(file = %path.display(), spec, "unresolved import");
            }
            resolved
        })
        .collect();
    deps.sort();
    deps.dedup();
    deps
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ContextError::io(e, path))
}

/// Reads edges straight from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsEdgeSource;

impl EdgeSource for FsEdgeSource {
    fn load(&self, file: &Path) -> Result<Vec<PathBuf>> {
        let content = read(file)?;
        Ok(dependencies_of(file, &content))
    }
}
