// src/select.rs
//! Choosing entry points from the matched files.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::error::{ContextError, Result};
use crate::matcher::MatchRecord;
use crate::render::display_path;

/// Picks the subset of matched files that seeds the traversal.
pub trait Selector {
    /// # Errors
    /// Returns an error if an interactive selector cannot talk to the user.
    fn select(&mut self, matches: &[MatchRecord]) -> Result<Vec<PathBuf>>;
}

/// Non-interactive: every matched file is an entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectAll;

impl Selector for SelectAll {
    fn select(&mut self, matches: &[MatchRecord]) -> Result<Vec<PathBuf>> {
        Ok(matches.iter().map(|m| m.file.clone()).collect())
    }
}

/// Lists matches on `output` and reads comma-separated indices from `input`.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
    base: PathBuf,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    /// `base` is the directory match paths are shown relative to.
    pub fn new(input: R, output: W, base: &Path) -> Self {
        Self {
            input,
            output,
            base: base.to_path_buf(),
        }
    }

    fn print_matches(&mut self, matches: &[MatchRecord]) -> io::Result<()> {
        for (i, m) in matches.iter().enumerate() {
            let lines: Vec<String> = m.lines.iter().map(ToString::to_string).collect();
            writeln!(
                self.output,
                "{} {} ({})",
                format!("[{i}]").cyan(),
                display_path(&m.file, &self.base),
                lines.join(",").dimmed()
            )?;
        }
        write!(self.output, "Select entry files (comma separated numbers): ")?;
        self.output.flush()
    }
}

impl PromptSelector<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, answer on stdin; stdout stays clean for the document.
    #[must_use]
    pub fn stdio(base: &Path) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), base)
    }
}

impl<R: BufRead, W: Write> Selector for PromptSelector<R, W> {
    fn select(&mut self, matches: &[MatchRecord]) -> Result<Vec<PathBuf>> {
        self.print_matches(matches)
            .map_err(|e| ContextError::io(e, "<prompt>"))?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(|e| ContextError::io(e, "<stdin>"))?;

        Ok(parse_selection(&answer, matches.len())
            .into_iter()
            .filter_map(|i| matches.get(i).map(|m| m.file.clone()))
            .collect())
    }
}

/// Parses `"0, 2,5"` into indices below `count`, first occurrence order kept.
///
/// Blank items, non-numbers and out-of-range indices are ignored.
#[must_use]
pub fn parse_selection(answer: &str, count: usize) -> Vec<usize> {
    let mut picked = Vec::new();
    for item in answer.split(',') {
        let Ok(i) = item.trim().parse::<usize>() else {
            continue;
        };
        if i < count && !picked.contains(&i) {
            picked.push(i);
        }
    }
    picked
}
