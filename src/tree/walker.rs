//! TreeWalker - recursive directory scan building the full tree in memory

use std::fs;
use std::io;
use std::path::Path;

use super::entry::{DirNode, FileEntry};

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// File basenames dropped from the tree and the statistics, matched
    /// exactly at any depth. Directories are never excluded.
    pub excluded_basenames: Vec<String>,
}

impl WalkerConfig {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_basenames.iter().any(|e| e == name)
    }
}

/// Walks a directory tree once and builds a `DirNode` per directory, with
/// subdirectories and files each sorted lexicographically.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Scan `root` recursively.
    ///
    /// An unreadable root is an error; unreadable nested directories appear
    /// in the tree with no children, and per-file stat failures become
    /// `FileStatus::Unavailable` entries.
    pub fn walk(&self, root: &Path) -> io::Result<DirNode> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string());
        let entries = fs::read_dir(root)?;
        Ok(self.build_node(name, entries))
    }

    fn build_node(&self, name: String, entries: fs::ReadDir) -> DirNode {
        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        let mut node = DirNode::new(name);

        for entry in entries {
            let path = entry.path();
            let entry_name = entry.file_name().to_string_lossy().into_owned();

            if path.is_dir() {
                // Symlinked directories are not descended into; everything
                // else is visited exactly once.
                if path.is_symlink() {
                    continue;
                }
                let subdir = match fs::read_dir(&path) {
                    Ok(children) => self.build_node(entry_name, children),
                    // Unreadable directory: keep it in the tree, childless.
                    Err(_) => DirNode::new(entry_name),
                };
                node.subdirs.push(subdir);
            } else {
                if self.config.is_excluded(&entry_name) {
                    continue;
                }
                node.files.push(FileEntry::from_path(&path, entry_name));
            }
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::FileStatus;

    fn walk(tree: &TestTree, excluded: &[&str]) -> DirNode {
        let config = WalkerConfig {
            excluded_basenames: excluded.iter().map(|s| s.to_string()).collect(),
        };
        TreeWalker::new(config)
            .walk(tree.path())
            .expect("walk should succeed")
    }

    #[test]
    fn test_walk_sorted_children() {
        let tree = TestTree::new();
        tree.add_file("zebra.txt", "z");
        tree.add_file("apple.txt", "a");
        tree.add_dir("beta");
        tree.add_dir("alpha");

        let root = walk(&tree, &[]);
        let dir_names: Vec<_> = root.subdirs.iter().map(|d| d.name.as_str()).collect();
        let file_names: Vec<_> = root.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(dir_names, ["alpha", "beta"]);
        assert_eq!(file_names, ["apple.txt", "zebra.txt"]);
    }

    #[test]
    fn test_walk_nested() {
        let tree = TestTree::new();
        tree.add_file("docs/guide/intro.md", "# intro");
        tree.add_file("docs/readme.txt", "hello");

        let root = walk(&tree, &[]);
        assert_eq!(root.subdirs.len(), 1);
        let docs = &root.subdirs[0];
        assert_eq!(docs.name, "docs");
        assert_eq!(docs.subdirs[0].name, "guide");
        assert_eq!(docs.subdirs[0].files[0].name, "intro.md");
        assert_eq!(root.file_count(), 2);
        assert_eq!(root.dir_count(), 2);
    }

    #[test]
    fn test_excluded_basename_dropped_at_any_depth() {
        let tree = TestTree::new();
        tree.add_file("report.md", "x");
        tree.add_file("keep.txt", "y");
        tree.add_file("sub/report.md", "z");

        let root = walk(&tree, &["report.md"]);
        assert_eq!(root.files.len(), 1);
        assert_eq!(root.files[0].name, "keep.txt");
        assert!(root.subdirs[0].files.is_empty());
    }

    #[test]
    fn test_directory_with_excluded_name_survives() {
        let tree = TestTree::new();
        tree.add_dir("report.md");
        tree.add_file("report.md/inner.txt", "inner");

        let root = walk(&tree, &["report.md"]);
        assert_eq!(root.subdirs.len(), 1);
        assert_eq!(root.subdirs[0].name, "report.md");
        assert_eq!(root.subdirs[0].files[0].name, "inner.txt");
    }

    #[test]
    fn test_walk_captures_size() {
        let tree = TestTree::new();
        tree.add_file("data.bin", "0123456789");

        let root = walk(&tree, &[]);
        match root.files[0].status {
            FileStatus::Available { size, .. } => assert_eq!(size, 10),
            FileStatus::Unavailable => panic!("expected metadata for data.bin"),
        }
    }

    #[test]
    fn test_walk_missing_root_errors() {
        let walker = TreeWalker::new(WalkerConfig::default());
        assert!(walker.walk(Path::new("/nonexistent/nowhere")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_unavailable() {
        use std::os::unix::fs::symlink;

        let tree = TestTree::new();
        tree.add_file("real.txt", "data");
        symlink("missing.txt", tree.path().join("dangling.txt"))
            .expect("failed to create symlink");

        let root = walk(&tree, &[]);
        let dangling = root
            .files
            .iter()
            .find(|f| f.name == "dangling.txt")
            .expect("dangling symlink should be listed");
        assert!(!dangling.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_descended() {
        use std::os::unix::fs::symlink;

        let tree = TestTree::new();
        tree.add_file("real/file.txt", "data");
        symlink(tree.path().join("real"), tree.path().join("link"))
            .expect("failed to create dir symlink");

        let root = walk(&tree, &[]);
        let dir_names: Vec<_> = root.subdirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(dir_names, ["real"]);
    }
}
