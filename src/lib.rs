//! dirmap - Generate a markdown map of a directory tree

pub mod icons;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use icons::{DIR_ICON, icon_for_name, legend_groups};
pub use output::{ReportFormatter, print_summary};
pub use tree::{
    DirNode, FileEntry, FileStatus, TreeWalker, WalkerConfig, format_size, format_timestamp,
};
