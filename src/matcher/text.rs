// src/matcher/text.rs
use std::path::Path;

use regex::Regex;

use super::{MatchMode, Matcher};
use crate::error::Result;

/// Regex line scan.
pub struct TextMatcher {
    pattern: Regex,
}

impl TextMatcher {
    /// Compiles the pattern for `keyword` in `mode`.
    ///
    /// # Errors
    /// Returns an error if the escaped keyword does not compile (size limits).
    pub fn new(keyword: &str, mode: MatchMode) -> Result<Self> {
        let pattern = match mode {
            MatchMode::Identifier => identifier_pattern(keyword),
            MatchMode::Literal => literal_pattern(keyword),
        };
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }
}

impl Matcher for TextMatcher {
    fn find_lines(&self, _path: &Path, content: &str) -> Vec<usize> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| self.pattern.is_match(line))
            .map(|(i, _)| i + 1)
            .collect()
    }
}

// `\b` only where the keyword edge is a word char, otherwise it could never match.
fn identifier_pattern(keyword: &str) -> String {
    let escaped = regex::escape(keyword);
    let lead = if starts_with_word(keyword) { r"\b" } else { "" };
    let trail = if ends_with_word(keyword) { r"\b" } else { "" };
    format!("{lead}{escaped}{trail}")
}

// No backreferences in `regex`, so each delimiter gets its own branch.
fn literal_pattern(keyword: &str) -> String {
    let escaped = regex::escape(keyword);
    format!("'{escaped}'|\"{escaped}\"|`{escaped}`")
}

fn starts_with_word(s: &str) -> bool {
    s.chars().next().is_some_and(is_word)
}

fn ends_with_word(s: &str) -> bool {
    s.chars().next_back().is_some_and(is_word)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(keyword: &str, mode: MatchMode, content: &str) -> Vec<usize> {
        TextMatcher::new(keyword, mode)
            .unwrap()
            .find_lines(Path::new("a.ts"), content)
    }

    #[test]
    fn test_identifier_whole_word() {
        let code = "const foo = 1;\nconst foobar = 2;\nbarfoo();\nfoo_bar;\nx.foo(y);\n";
        assert_eq!(lines("foo", MatchMode::Identifier, code), vec![1, 5]);
    }

    #[test]
    fn test_identifier_every_line() {
        let code = "foo\nnope\nfoo + foo\n";
        assert_eq!(lines("foo", MatchMode::Identifier, code), vec![1, 3]);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(lines("foo", MatchMode::Identifier, "const Foo = 1;").is_empty());
    }

    #[test]
    fn test_literal_exact_contents() {
        let code = r#"a("foo");
b('foo');
c(`foo`);
d("foobar");
e(foo);
f("foo');
"#;
        assert_eq!(lines("foo", MatchMode::Literal, code), vec![1, 2, 3]);
    }

    #[test]
    fn test_keyword_is_escaped() {
        let code = "user.id\nuserXid\n";
        assert_eq!(lines("user.id", MatchMode::Identifier, code), vec![1]);
    }

    #[test]
    fn test_non_word_edges() {
        let code = "const $store = 1;\nstore;\n";
        assert_eq!(lines("$store", MatchMode::Identifier, code), vec![1]);
    }

    #[test]
    fn test_crlf_lines() {
        let code = "x\r\nconst foo = 1;\r\n";
        assert_eq!(lines("foo", MatchMode::Identifier, code), vec![2]);
    }
}
