// src/graph/imports.rs
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// `import x from './a'`, `import type { T } from './t'`, multi-line named imports.
static IMPORT_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\b[^'"`;()]*?\bfrom\s*['"]([^'"\n]+)['"]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
// `import './a'`
static SIDE_EFFECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*['"]([^'"\n]+)['"]"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});
// `import('./a')`
static DYNAMIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*\(\s*['"]([^'"\n]+)['"]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static EXPORT_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bexport\b[^'"`;]*?\bfrom\s*['"]([^'"\n]+)['"]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static REQUIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\brequire\(\s*['"]([^'"\n]+)['"]\s*\)"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Extracts relative import specifiers from JS/TS source text.
///
/// Covers import declarations, dynamic `import()`, `export ... from` and
/// `require()` calls. Bare package specifiers (`react`, `@scope/pkg`) are
/// dropped because they never name a file in the scanned tree.
///
/// # Returns
/// Distinct specifiers in sorted order (e.g. "./utils", "../shared/api").
#[must_use]
pub fn extract(content: &str) -> Vec<String> {
    let mut specs = BTreeSet::new();

    for re in [
        &*IMPORT_FROM_RE,
        &*SIDE_EFFECT_RE,
        &*DYNAMIC_RE,
        &*EXPORT_FROM_RE,
        &*REQUIRE_RE,
    ] {
        for caps in re.captures_iter(content) {
            if let Some(m) = caps.get(1) {
                let spec = m.as_str();
                if is_relative(spec) {
                    specs.insert(spec.to_string());
                }
            }
        }
    }

    specs.into_iter().collect()
}

/// True for specifiers that are paths relative to the importing file.
#[must_use]
pub fn is_relative(spec: &str) -> bool {
    spec == "." || spec == ".." || spec.starts_with("./") || spec.starts_with("../")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_forms() {
        let code = r#"
            import { Foo } from "./components";
            import Bar from '../bar';
            import './side-effect';
            import type { T } from "./types";
            const lazy = import('./lazy');
        "#;
        let imports = extract(code);
        assert_eq!(
            imports,
            vec!["../bar", "./components", "./lazy", "./side-effect", "./types"]
        );
    }

    #[test]
    fn test_require_and_export_from() {
        let code = r#"
            const a = require('./a');
            const b = require( "./b" );
            export * from "./utils";
            export { x, y } from './xy';
        "#;
        let imports = extract(code);
        assert_eq!(imports, vec!["./a", "./b", "./utils", "./xy"]);
    }

    #[test]
    fn test_bare_specifiers_dropped() {
        let code = r#"
            import React from 'react';
            import { z } from "@scope/pkg";
            const fs = require('fs');
            import local from "./local";
        "#;
        assert_eq!(extract(code), vec!["./local"]);
    }

    #[test]
    fn test_multiple_per_line_and_dedup() {
        let code = r#"import a from './a'; import b from './b'; const c = require('./a');"#;
        assert_eq!(extract(code), vec!["./a", "./b"]);
    }

    #[test]
    fn test_multiline_named_import() {
        let code = "import {\n  alpha,\n  beta,\n} from './greek';\n";
        assert_eq!(extract(code), vec!["./greek"]);
    }

    #[test]
    fn test_plain_exports_ignored() {
        let code = r#"
            export const name = "./not-an-import";
            export function f() { return 1; }
        "#;
        assert!(extract(code).is_empty());
    }

    #[test]
    fn test_word_import_outside_a_construct_ignored() {
        let code = "// we import helpers lazily below\nconst route = \"./admin\";\n";
        assert!(extract(code).is_empty());

        let code = r#"
            /* the import of './z' happens at runtime */
            const important = "./y";
            log("import", './w');
        "#;
        assert!(extract(code).is_empty());
    }

    #[test]
    fn test_dynamic_import_spacing() {
        let code = "const m = await import (\n  './mod'\n);\nimport'./tight';";
        assert_eq!(extract(code), vec!["./mod", "./tight"]);
    }

    #[test]
    fn test_is_relative() {
        assert!(is_relative("./a"));
        assert!(is_relative("../a"));
        assert!(is_relative("."));
        assert!(is_relative(".."));
        assert!(!is_relative(".hidden"));
        assert!(!is_relative("lodash"));
        assert!(!is_relative("/abs/path"));
    }
}
