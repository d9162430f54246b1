//! Keyword-centred context slices of JS/TS source trees.
//!
//! A run lists the source files under a root, finds the ones mentioning a
//! keyword, lets a [`select::Selector`] pick entry points, then follows the
//! static import graph from them (optionally upstream to dependents, optionally
//! depth-bounded) and renders the resulting file set.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod lang;
pub mod matcher;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod select;

pub use error::{ContextError, Result};
