// src/graph/dependency.rs
//! The file-level import graph.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

static EMPTY: BTreeSet<PathBuf> = BTreeSet::new();

/// Directed graph over file paths; an edge points from a file to a file it imports.
///
/// Forward and reverse adjacency are updated together on every insertion, and
/// nothing is ever removed. One graph lives for one run.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    nodes: BTreeSet<PathBuf>,
    forward: HashMap<PathBuf, BTreeSet<PathBuf>>,
    reverse: HashMap<PathBuf, BTreeSet<PathBuf>>,
    /// Files whose outgoing edges have been computed.
    scanned: HashSet<PathBuf>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node without edges. Returns true if it was new.
    pub fn add_node(&mut self, path: &Path) -> bool {
        if self.nodes.contains(path) {
            return false;
        }
        self.nodes.insert(path.to_path_buf())
    }

    /// Records `from -> to`. Idempotent; returns true if the edge was new.
    pub fn add_edge(&mut self, from: &Path, to: &Path) -> bool {
        self.add_node(from);
        self.add_node(to);

        let inserted = self
            .forward
            .entry(from.to_path_buf())
            .or_default()
            .insert(to.to_path_buf());
        if inserted {
            self.reverse
                .entry(to.to_path_buf())
                .or_default()
                .insert(from.to_path_buf());
        }
        inserted
    }

    /// Files `node` imports. Empty for unknown nodes.
    #[must_use]
    pub fn out_neighbors(&self, node: &Path) -> &BTreeSet<PathBuf> {
        self.forward.get(node).unwrap_or(&EMPTY)
    }

    /// Files that import `node`. Empty for unknown nodes.
    #[must_use]
    pub fn in_neighbors(&self, node: &Path) -> &BTreeSet<PathBuf> {
        self.reverse.get(node).unwrap_or(&EMPTY)
    }

    pub fn mark_scanned(&mut self, path: &Path) {
        self.add_node(path);
        self.scanned.insert(path.to_path_buf());
    }

    #[must_use]
    pub fn is_scanned(&self, path: &Path) -> bool {
        self.scanned.contains(path)
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.nodes.contains(path)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PathBuf> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(BTreeSet::len).sum()
    }
}
