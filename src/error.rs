// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Keyword is required")]
    EmptyKeyword,

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl ContextError {
    /// Wraps an I/O failure with the path that caused it.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True for errors caused by what the caller asked for rather than by the tree.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound(_) | Self::EmptyKeyword | Self::Config { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ContextError>;
