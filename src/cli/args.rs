use clap::Parser;
use std::path::PathBuf;

use crate::matcher::MatcherKind;
use crate::render::OutputFormat;

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(
    name = "context-map",
    version,
    about = "Extract the files around a keyword along the import graph"
)]
pub struct Cli {
    /// Identifier or string literal to search for
    pub keyword: String,
    /// Match the keyword only as the whole contents of a string literal
    #[arg(long, short)]
    pub literal: bool,
    /// Output document format
    #[arg(long, short, value_enum)]
    pub output: Option<OutputFormat>,
    /// Directory to scan, relative to the working directory
    #[arg(long, short, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Show only the first N lines of each file (0 = whole file)
    #[arg(long, short, value_name = "N")]
    pub max_lines: Option<usize>,
    /// Maximum import depth to follow (0 or less = unbounded)
    #[arg(long, short, value_name = "N", allow_negative_numbers = true)]
    pub depth: Option<i64>,
    /// Also include files that import the selected ones
    #[arg(long, short)]
    pub upstream: bool,
    /// Select every matching file without prompting
    #[arg(long, short)]
    pub all: bool,
    /// Keyword matching strategy
    #[arg(long, value_enum)]
    pub matcher: Option<MatcherKind>,
    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
