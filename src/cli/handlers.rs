use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use super::args::Cli;
use crate::config::{self, Config, ContextMapToml};
use crate::matcher::MatchMode;
use crate::pipeline::{self, Outcome};
use crate::select::{PromptSelector, SelectAll, Selector};

/// Resolves flags over `context-map.toml` over built-in defaults.
///
/// # Errors
/// Returns an error if the config file exists but is invalid.
pub fn build_config(cli: &Cli, base: &Path) -> Result<Config> {
    let mut config = Config::new(&cli.keyword, base);
    config.apply_file(&ContextMapToml::load(base)?);

    config.mode = MatchMode::from_literal_flag(cli.literal);
    config.upstream = cli.upstream;
    config.select_all = cli.all;
    if let Some(root) = &cli.root {
        config.root.clone_from(root);
    }
    if let Some(format) = cli.output {
        config.format = format;
    }
    if let Some(max_lines) = cli.max_lines {
        config.max_lines = max_lines;
    }
    if let Some(depth) = cli.depth {
        config.max_depth = config::depth_limit(depth);
    }
    if let Some(matcher) = cli.matcher {
        config.matcher = matcher;
    }
    Ok(config)
}

/// Handles a parsed command line against the current working directory.
///
/// # Errors
/// Returns error if configuration, scanning or rendering fails.
pub fn handle_run(cli: &Cli) -> Result<Outcome> {
    let base = env::current_dir().context("cannot determine working directory")?;
    let config = build_config(cli, &base)?;

    let mut selector: Box<dyn Selector> = if config.select_all {
        Box::new(SelectAll)
    } else {
        Box::new(PromptSelector::stdio(&base))
    };

    Ok(pipeline::run(&config, selector.as_mut())?)
}
