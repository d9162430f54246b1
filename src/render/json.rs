// src/render/json.rs
use std::path::Path;

use crate::error::Result;

pub(super) fn render(entries: &[(String, &Path)]) -> Result<String> {
    let paths: Vec<&str> = entries.iter().map(|(shown, _)| shown.as_str()).collect();
    let mut out = serde_json::to_string_pretty(&paths)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let entries = vec![
            ("src/a.ts".to_string(), Path::new("/w/src/a.ts")),
            ("src/b.ts".to_string(), Path::new("/w/src/b.ts")),
        ];
        let out = render(&entries).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["src/a.ts", "src/b.ts"]);
        assert!(out.ends_with("]\n"));
    }
}
