//! Tree node types produced by the scan phase

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// A scanned directory: sorted subdirectories, then sorted files.
#[derive(Debug, Clone)]
pub struct DirNode {
    pub name: String,
    pub subdirs: Vec<DirNode>,
    pub files: Vec<FileEntry>,
}

/// A scanned file and the metadata gathered for it.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub status: FileStatus,
}

/// Metadata outcome for a single file.
///
/// A stat failure mid-scan (file removed, permission denied) is recorded
/// here instead of aborting the walk; the formatter renders it as an
/// "(unavailable)" row.
#[derive(Debug, Clone)]
pub enum FileStatus {
    Available { size: u64, modified: SystemTime },
    Unavailable,
}

impl DirNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subdirs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Total number of file entries in this subtree, unavailable ones
    /// included.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.subdirs.iter().map(DirNode::file_count).sum::<usize>()
    }

    /// Total number of directories in this subtree, not counting `self`.
    pub fn dir_count(&self) -> usize {
        self.subdirs.len() + self.subdirs.iter().map(DirNode::dir_count).sum::<usize>()
    }

    /// Sum of the sizes of all available files in this subtree.
    pub fn total_size(&self) -> u64 {
        let own: u64 = self
            .files
            .iter()
            .map(|f| match f.status {
                FileStatus::Available { size, .. } => size,
                FileStatus::Unavailable => 0,
            })
            .sum();
        own + self.subdirs.iter().map(DirNode::total_size).sum::<u64>()
    }
}

impl FileEntry {
    /// Stat `path` and capture size and mtime. Any failure yields an
    /// `Unavailable` entry.
    pub fn from_path(path: &Path, name: String) -> Self {
        let status = match fs::metadata(path) {
            Ok(meta) => match meta.modified() {
                Ok(modified) => FileStatus::Available {
                    size: meta.len(),
                    modified,
                },
                Err(_) => FileStatus::Unavailable,
            },
            Err(_) => FileStatus::Unavailable,
        };
        Self { name, status }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, FileStatus::Available { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn file(name: &str, size: u64) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            status: FileStatus::Available {
                size,
                modified: UNIX_EPOCH,
            },
        }
    }

    fn unavailable(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            status: FileStatus::Unavailable,
        }
    }

    fn sample_tree() -> DirNode {
        let mut docs = DirNode::new("docs");
        docs.files.push(file("a.txt", 10));

        let mut root = DirNode::new("project");
        root.subdirs.push(docs);
        root.files.push(file("b.png", 2048));
        root.files.push(unavailable("ghost.tmp"));
        root
    }

    #[test]
    fn test_counts() {
        let tree = sample_tree();
        assert_eq!(tree.file_count(), 3);
        assert_eq!(tree.dir_count(), 1);
    }

    #[test]
    fn test_total_size_skips_unavailable() {
        let tree = sample_tree();
        assert_eq!(tree.total_size(), 2058);
    }

    #[test]
    fn test_empty_dir() {
        let tree = DirNode::new("empty");
        assert_eq!(tree.file_count(), 0);
        assert_eq!(tree.dir_count(), 0);
        assert_eq!(tree.total_size(), 0);
    }

    #[test]
    fn test_from_path_missing_file_is_unavailable() {
        let entry = FileEntry::from_path(
            Path::new("/nonexistent/definitely-not-here"),
            "definitely-not-here".to_string(),
        );
        assert!(!entry.is_available());
    }
}
