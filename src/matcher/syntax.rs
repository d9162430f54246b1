// src/matcher/syntax.rs
use std::collections::BTreeSet;
use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use super::{MatchMode, Matcher, TextMatcher};
use crate::error::Result;
use crate::lang::Lang;

const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "type_identifier",
];

const STRING_KINDS: &[&str] = &["string", "template_string"];

/// Tree-sitter node scan.
///
/// Unlike the text scan, identifier mode ignores comments and string contents,
/// and literal mode ignores quotes inside comments. Files with an unrecognized
/// extension fall back to the text scan. Malformed source still yields a tree
/// (with error nodes), so matches in the well-formed parts are still reported.
pub struct SyntaxMatcher {
    keyword: String,
    mode: MatchMode,
    fallback: TextMatcher,
}

impl SyntaxMatcher {
    /// # Errors
    /// Returns an error if the fallback pattern cannot be compiled.
    pub fn new(keyword: &str, mode: MatchMode) -> Result<Self> {
        Ok(Self {
            keyword: keyword.to_string(),
            mode,
            fallback: TextMatcher::new(keyword, mode)?,
        })
    }

    fn parse(path: &Path, content: &str) -> Option<Tree> {
        let lang = Lang::from_path(path)?;
        let mut parser = Parser::new();
        parser.set_language(lang.grammar()).ok()?;
        parser.parse(content, None)
    }

    fn node_matches(&self, node: Node, source: &[u8]) -> bool {
        let kinds = match self.mode {
            MatchMode::Identifier => IDENTIFIER_KINDS,
            MatchMode::Literal => STRING_KINDS,
        };
        if !kinds.contains(&node.kind()) {
            return false;
        }
        let Ok(text) = node.utf8_text(source) else {
            return false;
        };
        match self.mode {
            MatchMode::Identifier => text == self.keyword,
            MatchMode::Literal => unquote(text) == Some(self.keyword.as_str()),
        }
    }

    fn collect(&self, tree: &Tree, source: &[u8]) -> Vec<usize> {
        let mut lines = BTreeSet::new();
        let mut cursor = tree.walk();

        loop {
            let node = cursor.node();
            if self.node_matches(node, source) {
                lines.insert(node.start_position().row + 1);
            }
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return lines.into_iter().collect();
                }
            }
        }
    }
}

impl Matcher for SyntaxMatcher {
    fn find_lines(&self, path: &Path, content: &str) -> Vec<usize> {
        match Self::parse(path, content) {
            Some(tree) => self.collect(&tree, content.as_bytes()),
            None => self.fallback.find_lines(path, content),
        }
    }
}

fn unquote(text: &str) -> Option<&str> {
    let first = text.chars().next()?;
    if !matches!(first, '\'' | '"' | '`') || text.len() < 2 || !text.ends_with(first) {
        return None;
    }
    text.get(1..text.len() - 1)
}
