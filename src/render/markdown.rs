// src/render/markdown.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{ContextError, Result};
use crate::lang;

#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

pub(super) fn render(entries: &[(String, &Path)], max_lines: usize) -> Result<String> {
    let shown: Vec<&str> = entries.iter().map(|(s, _)| s.as_str()).collect();

    let mut out = String::new();
    out.push_str(&format!("```text\n{}\n```\n", file_tree(&shown)));

    for (name, path) in entries {
        let content = fs::read_to_string(path).map_err(|e| ContextError::io(e, *path))?;
        write_file_section(&mut out, name, lang::fence_tag(path), &content, max_lines);
    }

    Ok(out)
}

fn write_file_section(out: &mut String, name: &str, tag: &str, content: &str, max_lines: usize) {
    let limit = if max_lines > 0 { max_lines } else { usize::MAX };
    let body: Vec<&str> = content.lines().take(limit).collect();

    out.push_str(&format!("\n### {name}\n\n```{tag}\n"));
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("```\n");
}

/// Draws sorted `/`-separated paths as a tree rooted at `.`.
fn file_tree(paths: &[&str]) -> String {
    let mut root = TreeNode::default();
    for p in paths {
        let mut node = &mut root;
        for part in p.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(part.to_string()).or_default();
        }
    }

    let mut lines = vec![".".to_string()];
    walk_tree(&root, "", &mut lines);
    lines.join("\n")
}

fn walk_tree(node: &TreeNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));

        let indent = if is_last { "    " } else { "│   " };
        walk_tree(child, &format!("{prefix}{indent}"), lines);
    }
}
