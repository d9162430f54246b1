// src/config.rs
//! Run configuration: built-in defaults, `context-map.toml`, then CLI flags.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::discovery::DEFAULT_PRUNE;
use crate::error::{ContextError, Result};
use crate::matcher::{MatchMode, MatcherKind};
use crate::render::OutputFormat;

pub const CONFIG_FILE: &str = "context-map.toml";
pub const DEFAULT_ROOT: &str = "src";

/// Everything one run needs, fully resolved.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct Config {
    pub keyword: String,
    pub mode: MatchMode,
    pub matcher: MatcherKind,
    pub format: OutputFormat,
    /// Directory relative paths are resolved against and shown relative to.
    pub base: PathBuf,
    pub root: PathBuf,
    pub prune: Vec<String>,
    /// 0 keeps whole files.
    pub max_lines: usize,
    /// 0 means unbounded.
    pub max_depth: usize,
    pub upstream: bool,
    pub select_all: bool,
}

/// Maps a user-supplied depth to a traversal bound; anything not positive is unbounded.
#[must_use]
pub fn depth_limit(depth: i64) -> usize {
    usize::try_from(depth).unwrap_or(0)
}

impl Config {
    #[must_use]
    pub fn new(keyword: &str, base: &Path) -> Self {
        Self {
            keyword: keyword.to_string(),
            mode: MatchMode::default(),
            matcher: MatcherKind::default(),
            format: OutputFormat::default(),
            base: base.to_path_buf(),
            root: PathBuf::from(DEFAULT_ROOT),
            prune: DEFAULT_PRUNE.iter().map(ToString::to_string).collect(),
            max_lines: 0,
            max_depth: 0,
            upstream: false,
            select_all: false,
        }
    }

    /// Layers values present in the config file over the defaults.
    pub fn apply_file(&mut self, file: &ContextMapToml) {
        let scan = &file.scan;
        if let Some(root) = &scan.root {
            self.root.clone_from(root);
        }
        if let Some(prune) = &scan.prune {
            self.prune.clone_from(prune);
        }
        if let Some(matcher) = scan.matcher {
            self.matcher = matcher;
        }

        let output = &file.output;
        if let Some(format) = output.format {
            self.format = format;
        }
        if let Some(max_lines) = output.max_lines {
            self.max_lines = max_lines;
        }
        if let Some(depth) = output.depth {
            self.max_depth = depth_limit(depth);
        }
    }

    /// Checks the parts of the configuration that do not need the filesystem.
    ///
    /// # Errors
    /// Returns an error if the keyword is empty.
    pub fn validate(&self) -> Result<()> {
        if self.keyword.is_empty() {
            return Err(ContextError::EmptyKeyword);
        }
        Ok(())
    }

    /// The scan root as an absolute path.
    #[must_use]
    pub fn root_dir(&self) -> PathBuf {
        crate::graph::resolver::normalize(&self.base.join(&self.root))
    }
}

/// On-disk shape of `context-map.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextMapToml {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSection {
    pub root: Option<PathBuf>,
    pub prune: Option<Vec<String>>,
    pub matcher: Option<MatcherKind>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub max_lines: Option<usize>,
    pub depth: Option<i64>,
}

impl ContextMapToml {
    /// Loads `context-map.toml` from `dir`; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content, &path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ContextError::io(e, path)),
        }
    }

    /// # Errors
    /// Returns an error naming `path` if `content` is not a valid config.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| ContextError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new("foo", Path::new("/w"));
        assert_eq!(c.root, PathBuf::from("src"));
        assert_eq!(c.root_dir(), PathBuf::from("/w/src"));
        assert_eq!(c.format, OutputFormat::Markdown);
        assert_eq!(c.matcher, MatcherKind::Text);
        assert_eq!(c.mode, MatchMode::Identifier);
        assert_eq!(c.prune, vec!["node_modules", ".git"]);
        assert_eq!(c.max_depth, 0);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
[scan]
root = "app"
prune = ["vendor"]
matcher = "syntax"

[output]
format = "json"
max_lines = 40
depth = 2
"#;
        let file = ContextMapToml::parse(toml, Path::new(CONFIG_FILE)).unwrap();
        let mut c = Config::new("foo", Path::new("/w"));
        c.apply_file(&file);

        assert_eq!(c.root, PathBuf::from("app"));
        assert_eq!(c.prune, vec!["vendor"]);
        assert_eq!(c.matcher, MatcherKind::Syntax);
        assert_eq!(c.format, OutputFormat::Json);
        assert_eq!(c.max_lines, 40);
        assert_eq!(c.max_depth, 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = ContextMapToml::parse("[output]\ndepth = 3\n", Path::new(CONFIG_FILE)).unwrap();
        let mut c = Config::new("foo", Path::new("/w"));
        c.apply_file(&file);
        assert_eq!(c.max_depth, 3);
        assert_eq!(c.root, PathBuf::from("src"));
        assert_eq!(c.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_non_positive_depth_is_unbounded() {
        assert_eq!(depth_limit(3), 3);
        assert_eq!(depth_limit(0), 0);
        assert_eq!(depth_limit(-1), 0);
        assert_eq!(depth_limit(i64::MIN), 0);

        let file = ContextMapToml::parse("[output]\ndepth = -2\n", Path::new(CONFIG_FILE)).unwrap();
        let mut c = Config::new("foo", Path::new("/w"));
        c.max_depth = 5;
        c.apply_file(&file);
        assert_eq!(c.max_depth, 0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ContextMapToml::parse("[scan]\nrooot = \"x\"\n", Path::new(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ContextError::Config { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = ContextMapToml::load(dir.path()).unwrap();
        assert!(file.scan.root.is_none());
        assert!(file.output.format.is_none());
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let c = Config::new("", Path::new("/w"));
        assert!(matches!(c.validate(), Err(ContextError::EmptyKeyword)));
    }
}
