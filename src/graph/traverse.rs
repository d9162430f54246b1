// src/graph/traverse.rs
//! Breadth-first expansion over the import graph.

use std::collections::{BTreeSet, VecDeque};
use std::convert::Infallible;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::dependency::DependencyGraph;
use crate::error::{ContextError, Result};
use crate::lang;

/// Supplies the outgoing edges of a file the scan never reached.
pub trait EdgeSource {
    /// Returns the resolved dependencies of `file`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn load(&self, file: &Path) -> Result<Vec<PathBuf>>;
}

/// Every file that transitively imports any of `seeds`.
///
/// Seeds are never reported, even when a cycle leads back to them.
#[must_use]
pub fn ancestors(graph: &DependencyGraph, seeds: &[PathBuf]) -> BTreeSet<PathBuf> {
    let mut visited: BTreeSet<PathBuf> = BTreeSet::new();
    let mut queue: VecDeque<&Path> = seeds.iter().map(PathBuf::as_path).collect();

    while let Some(file) = queue.pop_front() {
        if !visited.insert(file.to_path_buf()) {
            continue;
        }
        for parent in graph.in_neighbors(file) {
            if !visited.contains(parent) {
                queue.push_back(parent);
            }
        }
    }

    for seed in seeds {
        visited.remove(seed);
    }
    debug!(seeds = seeds.len(), found = visited.len(), "ancestor discovery");
    visited
}

/// Files reachable from `entries` over the current graph, entries included.
///
/// `max_depth == 0` means unbounded. Nodes at `max_depth` are kept but not expanded.
#[must_use]
pub fn descendants(
    graph: &DependencyGraph,
    entries: &[PathBuf],
    max_depth: usize,
) -> BTreeSet<PathBuf> {
    let walked = closure(entries, max_depth, |file| {
        Ok::<_, Infallible>(graph.out_neighbors(file).iter().cloned().collect())
    });
    match walked {
        Ok(set) => set,
        Err(never) => match never {},
    }
}

/// Like [`descendants`], but loads edges for source files the graph has not scanned yet.
///
/// # Errors
/// Returns an error if `source` fails to load a file.
pub fn descendants_lazy<S: EdgeSource + ?Sized>(
    graph: &mut DependencyGraph,
    source: &S,
    entries: &[PathBuf],
    max_depth: usize,
) -> Result<BTreeSet<PathBuf>> {
    let set = closure(entries, max_depth, |file| {
        if !graph.is_scanned(file) {
            if lang::is_source_file(file) {
                let deps = source.load(file)?;
                debug!(file = %file.display(), edges = deps.len(), "lazy edge discovery");
                for dep in &deps {
                    graph.add_edge(file, dep);
                }
            }
            graph.mark_scanned(file);
        }
        Ok::<_, ContextError>(graph.out_neighbors(file).iter().cloned().collect())
    })?;
    debug!(entries = entries.len(), max_depth, closure = set.len(), "descendant closure");
    Ok(set)
}

fn closure<E, F>(
    entries: &[PathBuf],
    max_depth: usize,
    mut expand: F,
) -> std::result::Result<BTreeSet<PathBuf>, E>
where
    F: FnMut(&Path) -> std::result::Result<Vec<PathBuf>, E>,
{
    let mut visited: BTreeSet<PathBuf> = BTreeSet::new();
    let mut queue: VecDeque<(PathBuf, usize)> =
        entries.iter().map(|f| (f.clone(), 0)).collect();

    while let Some((file, depth)) = queue.pop_front() {
        if visited.contains(&file) {
            continue;
        }
        visited.insert(file.clone());

        if max_depth > 0 && depth >= max_depth {
            continue;
        }
        for dep in expand(&file)? {
            if !visited.contains(&dep) {
                queue.push_back((dep, depth + 1));
            }
        }
    }

    Ok(visited)
}
