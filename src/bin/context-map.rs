// src/bin/context-map.rs
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use context_map::cli::{self, Cli};
use context_map::exit::ContextExit;
use context_map::pipeline::Outcome;

fn main() -> ContextExit {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ContextExit::for_error(&e)
        }
    }
}

fn run(args: &Cli) -> Result<ContextExit> {
    match cli::handle_run(args)? {
        Outcome::Rendered(slice) => {
            let mut out = io::stdout().lock();
            out.write_all(slice.document.as_bytes())?;
            out.flush()?;
            Ok(ContextExit::Success)
        }
        Outcome::NoMatches => {
            eprintln!("{}", "No matches found".yellow());
            Ok(ContextExit::NothingToDo)
        }
        Outcome::NothingSelected => {
            eprintln!("{}", "No files selected".yellow());
            Ok(ContextExit::NothingToDo)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
