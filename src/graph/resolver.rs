// src/graph/resolver.rs
use crate::lang::SOURCE_EXTENSIONS;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Resolves a relative import specifier to an existing file.
///
/// Candidates, in order: the joined path itself, the path with each source
/// extension appended, then `index` + each extension inside it. Returns `None`
/// when nothing exists; callers treat that as "no edge", not as a failure.
#[must_use]
pub fn resolve(importer: &Path, spec: &str) -> Option<PathBuf> {
    let parent = importer.parent()?;
    let base = normalize(&parent.join(spec));
    candidates(&base).into_iter().find(|c| c.is_file())
}

/// Every path probed for `base`, in priority order.
#[must_use]
pub fn candidates(base: &Path) -> Vec<PathBuf> {
    let index = base.join("index");
    let mut out = Vec::with_capacity(1 + SOURCE_EXTENSIONS.len() * 2);
    out.push(base.to_path_buf());
    out.extend(SOURCE_EXTENSIONS.iter().map(|ext| append_ext(base, ext)));
    out.extend(SOURCE_EXTENSIONS.iter().map(|ext| append_ext(&index, ext)));
    out
}

// Appends rather than replaces, so `foo.service` probes `foo.service.ts`.
fn append_ext(path: &Path, ext: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(ext);
    PathBuf::from(s)
}

/// Lexically normalizes a path: drops `.`, folds `..` into the previous
/// normal component. Leading `..` on relative paths is kept; `..` at the
/// filesystem root stays at the root. Symlinks are not consulted.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &TempDir, rel: &str) -> PathBuf {
        let path = root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        normalize(&path)
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("src/./a/../b.ts")), PathBuf::from("src/b.ts"));
        assert_eq!(normalize(Path::new("../x/./y")), PathBuf::from("../x/y"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("/../etc")), PathBuf::from("/etc"));
        assert_eq!(normalize(Path::new("./")), PathBuf::new());
    }

    #[test]
    fn test_resolves_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        let b = touch(&dir, "src/b.ts");
        assert_eq!(resolve(&a, "./b"), Some(b));
    }

    #[test]
    fn test_exact_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        let exact = touch(&dir, "src/b.js");
        touch(&dir, "src/b.js.ts");
        assert_eq!(resolve(&a, "./b.js"), Some(exact));
    }

    #[test]
    fn test_direct_file_beats_index() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        let direct = touch(&dir, "src/lib.ts");
        touch(&dir, "src/lib/index.ts");
        assert_eq!(resolve(&a, "./lib"), Some(direct));
    }

    #[test]
    fn test_extension_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        touch(&dir, "src/util.js");
        let ts = touch(&dir, "src/util.tsx");
        assert_eq!(resolve(&a, "./util"), Some(ts));
    }

    #[test]
    fn test_index_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        let index = touch(&dir, "src/components/index.jsx");
        assert_eq!(resolve(&a, "./components"), Some(index));
    }

    #[test]
    fn test_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/feature/a.ts");
        let shared = touch(&dir, "src/shared/api.ts");
        assert_eq!(resolve(&a, "../shared/api"), Some(shared));
    }

    #[test]
    fn test_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        let svc = touch(&dir, "src/user.service.ts");
        assert_eq!(resolve(&a, "./user.service"), Some(svc));
    }

    #[test]
    fn test_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        assert_eq!(resolve(&a, "./ghost"), None);
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(&dir, "src/a.ts");
        fs::create_dir_all(dir.path().join("src/empty")).unwrap();
        assert_eq!(resolve(&a, "./empty"), None);
    }

    #[test]
    fn test_candidate_order() {
        let got = candidates(Path::new("src/b"));
        let want: Vec<PathBuf> = [
            "src/b",
            "src/b.ts",
            "src/b.tsx",
            "src/b.js",
            "src/b.jsx",
            "src/b/index.ts",
            "src/b/index.tsx",
            "src/b/index.js",
            "src/b/index.jsx",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(got, want);
    }
}
