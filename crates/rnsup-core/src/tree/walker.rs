//! Depth-limited directory walk producing a flat, pre-order node list

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Entry names that are never shown in a project tree
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", ".git", "dist", "build", ".rnsup"];

/// Deepest level included by default (levels start at 0)
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Depth limit and ignore list for a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Deepest level emitted, inclusive
    pub max_depth: usize,

    /// Entry names skipped together with their subtree
    pub ignore: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore: DEFAULT_IGNORE.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl WalkOptions {
    /// Default ignore list with a different depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// One filesystem entry discovered during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Base name of the entry
    pub name: String,

    /// Depth below the walk root; the root's direct children are level 0
    pub level: usize,

    /// Whether the entry is a directory
    pub is_dir: bool,

    /// Path of the entry, rooted at the walk root
    pub path: PathBuf,

    /// Path relative to the walk root, always `/`-separated
    pub relative_path: String,

    /// Size in bytes, files only, when stat succeeded
    pub size: Option<u64>,

    /// Last modification time, when stat succeeded
    pub modified: Option<DateTime<Local>>,
}

impl TreeNode {
    fn from_entry(root: &Path, entry: &DirEntry) -> Self {
        let is_dir = entry.file_type().is_dir();
        let path = entry.path().to_path_buf();

        // Follows symlinks like `stat`; a dangling link just loses its metadata
        let (size, modified) = match fs::metadata(&path) {
            Ok(meta) => {
                let size = if is_dir { None } else { Some(meta.len()) };
                let modified = meta.modified().ok().map(DateTime::<Local>::from);
                (size, modified)
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "stat failed");
                (None, None)
            }
        };

        Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            level: entry.depth().saturating_sub(1),
            relative_path: relative_slash_path(root, &path),
            is_dir,
            path,
            size,
            modified,
        }
    }
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Collation used for sibling names: case-insensitive first, lowercase
/// before uppercase on a tie, then raw order so the result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => Ordering::Equal,
                })
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

/// Directories before files, then by name
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    b_dir.cmp(&a_dir).then_with(|| {
        compare_names(
            &a.file_name().to_string_lossy(),
            &b.file_name().to_string_lossy(),
        )
    })
}

/// Walk `root` and return its entries in pre-order, up to `max_depth`.
///
/// Entries whose name is listed in `ignore` or starts with `.` are skipped
/// together with everything below them. A directory that cannot be listed
/// is logged and treated as empty. Only a missing root is an error.
pub fn walk<S: AsRef<str>>(root: &Path, max_depth: usize, ignore: &[S]) -> Result<Vec<TreeNode>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }

    let is_ignored = |entry: &DirEntry| {
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || ignore.iter().any(|pattern| pattern.as_ref() == name)
    };

    // walkdir depth 0 is the root itself, so node level N is walk depth N + 1
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth.saturating_add(1))
        .sort_by(compare_entries)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry));

    let mut nodes = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => nodes.push(TreeNode::from_entry(root, &entry)),
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                tracing::warn!(path = %path, error = %err, "Skipping unreadable directory");
            }
        }
    }

    tracing::debug!(root = %root.display(), nodes = nodes.len(), "walk complete");
    Ok(nodes)
}

/// [`walk`] driven by a [`WalkOptions`]
pub fn walk_with(root: &Path, options: &WalkOptions) -> Result<Vec<TreeNode>> {
    walk(root, options.max_depth, options.ignore.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(nodes: &[TreeNode]) -> Vec<(&str, usize)> {
        nodes.iter().map(|n| (n.name.as_str(), n.level)).collect()
    }

    #[test]
    fn test_directories_before_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.ts"), "a").unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, DEFAULT_IGNORE).unwrap();

        assert_eq!(names(&nodes), vec![("sub", 0), ("a.ts", 0), ("b.json", 0)]);
        assert!(nodes[0].is_dir);
        assert_eq!(nodes[0].size, None);
        assert!(!nodes[1].is_dir);
        assert_eq!(nodes[1].size, Some(1));
        assert_eq!(nodes[2].size, Some(2));
        assert!(nodes.iter().all(|n| n.modified.is_some()));
    }

    #[test]
    fn test_pre_order_with_relative_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("src/components/Button.tsx"), "").unwrap();
        fs::write(dir.path().join("src/App.tsx"), "").unwrap();
        fs::write(dir.path().join("index.js"), "").unwrap();

        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, DEFAULT_IGNORE).unwrap();

        assert_eq!(
            names(&nodes),
            vec![
                ("assets", 0),
                ("src", 0),
                ("components", 1),
                ("Button.tsx", 2),
                ("App.tsx", 1),
                ("index.js", 0),
            ]
        );
        assert_eq!(nodes[3].relative_path, "src/components/Button.tsx");
        assert_eq!(nodes[3].path, dir.path().join("src/components/Button.tsx"));
    }

    #[test]
    fn test_alphabetical_within_partitions() {
        let dir = tempdir().unwrap();
        for name in ["c.ts", "B.ts", "a.ts"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        for name in ["Zeta", "alpha"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, DEFAULT_IGNORE).unwrap();

        assert_eq!(
            names(&nodes),
            vec![("alpha", 0), ("Zeta", 0), ("a.ts", 0), ("B.ts", 0), ("c.ts", 0)]
        );
    }

    #[test]
    fn test_compare_names_lowercase_first_on_tie() {
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("Apple", "banana"), Ordering::Less);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_ignored_names_and_hidden_entries() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/react")).unwrap();
        fs::create_dir_all(dir.path().join("src/node_modules/nested")).unwrap();
        fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        fs::write(dir.path().join(".env"), "KEY=1").unwrap();
        fs::write(dir.path().join("src/main.ts"), "").unwrap();

        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, &["node_modules"]).unwrap();

        assert_eq!(names(&nodes), vec![("src", 0), ("main.ts", 1)]);
        assert!(nodes.iter().all(|n| !n.relative_path.contains("node_modules")));
    }

    #[test]
    fn test_max_depth_is_inclusive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("a/b/c/deep.txt"), "").unwrap();

        let nodes = walk(dir.path(), 1, DEFAULT_IGNORE).unwrap();
        assert_eq!(names(&nodes), vec![("a", 0), ("b", 1)]);

        let nodes = walk(dir.path(), 0, DEFAULT_IGNORE).unwrap();
        assert_eq!(names(&nodes), vec![("a", 0)]);
    }

    #[test]
    fn test_every_node_has_parent_before_it() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("x/y/z")).unwrap();
        fs::create_dir_all(dir.path().join("x/w")).unwrap();
        fs::write(dir.path().join("x/y/file.md"), "").unwrap();
        fs::write(dir.path().join("top.md"), "").unwrap();

        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, DEFAULT_IGNORE).unwrap();

        for (i, node) in nodes.iter().enumerate() {
            if node.level == 0 {
                continue;
            }
            let parent = nodes[..i]
                .iter()
                .rev()
                .find(|candidate| candidate.level < node.level)
                .unwrap();
            assert_eq!(parent.level, node.level - 1);
            assert!(parent.is_dir);
            assert!(node.relative_path.starts_with(&parent.relative_path));
        }
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            walk(&missing, DEFAULT_MAX_DEPTH, DEFAULT_IGNORE),
            Err(Error::RootNotFound(_))
        ));

        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            walk(&file, DEFAULT_MAX_DEPTH, DEFAULT_IGNORE),
            Err(Error::RootNotFound(_))
        ));
    }

    #[test]
    fn test_walk_options_default() {
        let options = WalkOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.ignore, DEFAULT_IGNORE);

        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("build/out")).unwrap();
        fs::create_dir_all(dir.path().join("src/a/b")).unwrap();

        let nodes = walk_with(dir.path(), &WalkOptions::with_max_depth(1)).unwrap();
        assert_eq!(names(&nodes), vec![("src", 0), ("a", 1)]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_treated_as_empty() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::write(dir.path().join("z.ts"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list it, so there is nothing to check
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, DEFAULT_IGNORE);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let nodes = nodes.unwrap();
        assert_eq!(names(&nodes), vec![("locked", 0), ("z.ts", 0)]);
        assert!(nodes[0].is_dir);
    }

    #[test]
    fn test_empty_root() {
        let dir = tempdir().unwrap();
        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, DEFAULT_IGNORE).unwrap();
        assert!(nodes.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_keeps_walking() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("broken")).unwrap();
        fs::write(dir.path().join("ok.ts"), "x").unwrap();

        let nodes = walk(dir.path(), DEFAULT_MAX_DEPTH, DEFAULT_IGNORE).unwrap();

        assert_eq!(names(&nodes), vec![("broken", 0), ("ok.ts", 0)]);
        assert_eq!(nodes[0].size, None);
        assert_eq!(nodes[0].modified, None);
        assert_eq!(nodes[1].size, Some(1));
    }
}
