// src/matcher/mod.rs
//! Keyword matching strategies used to pick seed files.

mod syntax;
mod text;

pub use syntax::SyntaxMatcher;
pub use text::TextMatcher;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the keyword must appear on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Whole identifier, never part of a longer one.
    #[default]
    Identifier,
    /// Entire contents of a `'`, `"` or backtick string.
    Literal,
}

impl MatchMode {
    #[must_use]
    pub fn from_literal_flag(literal: bool) -> Self {
        if literal {
            Self::Literal
        } else {
            Self::Identifier
        }
    }
}

/// Which matcher implementation a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// Regex line scan.
    #[default]
    Text,
    /// Tree-sitter node scan.
    Syntax,
}

/// Lines of one file that matched the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub file: PathBuf,
    /// Ascending, distinct, 1-based.
    pub lines: Vec<usize>,
}

/// A keyword matcher prepared for one keyword and mode.
pub trait Matcher: Send + Sync {
    /// Returns the ascending, distinct, 1-based lines of `content` that match.
    ///
    /// `path` only informs strategies that care about the file's language.
    fn find_lines(&self, path: &Path, content: &str) -> Vec<usize>;
}

/// Builds the matcher selected by `kind`.
///
/// # Errors
/// Returns an error if the keyword pattern cannot be compiled.
pub fn build(kind: MatcherKind, keyword: &str, mode: MatchMode) -> Result<Box<dyn Matcher>> {
    let matcher: Box<dyn Matcher> = match kind {
        MatcherKind::Text => Box::new(TextMatcher::new(keyword, mode)?),
        MatcherKind::Syntax => Box::new(SyntaxMatcher::new(keyword, mode)?),
    };
    Ok(matcher)
}

/// One-shot line match with the text strategy.
///
/// # Errors
/// Returns an error if the keyword pattern cannot be compiled.
pub fn find(content: &str, keyword: &str, literal: bool) -> Result<Vec<usize>> {
    let matcher = TextMatcher::new(keyword, MatchMode::from_literal_flag(literal))?;
    Ok(matcher.find_lines(Path::new(""), content))
}
