use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Collect the set of directories that a file's imports resolve to,
/// relative to the documentation page root.
///
/// Each import is rooted at `/<page_root>/<import>`, lexically cleaned,
/// and reduced to its parent directory; the leading `/` is stripped
/// from each result. Duplicates collapse through the set. Iteration
/// order is not part of the contract.
pub fn collect<S: AsRef<str>>(imports: &[S], page_root: &str) -> HashSet<String> {
    let mut directories = HashSet::with_capacity(imports.len());
    for import in imports {
        let rooted = format!("/{page_root}/{}", import.as_ref());
        let cleaned = clean_path(Path::new(&rooted));
        let directory = cleaned.parent().unwrap_or(Path::new("/"));
        let display = directory.to_string_lossy();
        let key = display.strip_prefix('/').unwrap_or(&display);
        directories.insert(key.to_string());
    }
    directories
}

/// Collapse `.`, `..`, and redundant separators in a rooted path
/// without touching the filesystem. `..` at the root is dropped.
fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            other => components.push(other),
        }
    }
    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_root_prefix() {
        let dirs = collect(&["a/b/f.schema"], "");
        assert_eq!(dirs, HashSet::from(["a/b".to_string()]));
    }

    #[test]
    fn with_root_prefix() {
        let dirs = collect(&["a/b/f.schema"], "root");
        assert_eq!(dirs, HashSet::from(["root/a/b".to_string()]));
    }

    #[test]
    fn duplicate_imports_collapse() {
        let dirs = collect(&["a/b/f.schema", "a/b/g.schema"], "");
        assert_eq!(dirs.len(), 1);
    }

    #[test]
    fn empty_input_is_empty_set() {
        let dirs: HashSet<String> = collect::<&str>(&[], "root");
        assert!(dirs.is_empty());
    }

    #[test]
    fn dot_segments_are_cleaned() {
        let dirs = collect(&["a/./b/../c/f.schema"], "");
        assert_eq!(dirs, HashSet::from(["a/c".to_string()]));
    }

    #[test]
    fn top_level_import_maps_to_root_directory() {
        let dirs = collect(&["f.schema"], "");
        assert_eq!(dirs, HashSet::from([String::new()]));
    }
}
