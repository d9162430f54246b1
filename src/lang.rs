use std::path::Path;

use tree_sitter::Language;

/// Source extensions, in resolution priority order.
///
/// Shared by directory listing and module resolution.
pub const SOURCE_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".js", ".jsx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    TypeScript,
    /// TSX grammar; also used for plain JS so JSX in `.js` files parses.
    Tsx,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "ts" => Some(Self::TypeScript),
            "tsx" | "js" | "jsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_ext)
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::language_typescript(),
            Self::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }
}

/// True if the file name ends with one of [`SOURCE_EXTENSIONS`].
#[must_use]
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

/// Tag for a fenced code block, taken from the file extension.
#[must_use]
pub fn fence_tag(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}
