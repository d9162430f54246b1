// src/graph/mod.rs
//! Import extraction, module resolution and the file dependency graph.

pub mod dependency;
pub mod imports;
pub mod resolver;
pub mod traverse;

pub use dependency::DependencyGraph;
pub use traverse::{ancestors, descendants, descendants_lazy, EdgeSource};
