//! Directory tree scanning
//!
//! This module builds the in-memory tree consumed by the report formatter.
//! `TreeWalker` performs a single recursive pass over the filesystem and
//! returns a `DirNode` with sorted children; per-entry stat failures are
//! captured as `FileStatus::Unavailable` rather than aborting the scan.

mod entry;
mod utils;
mod walker;

pub use entry::{DirNode, FileEntry, FileStatus};
pub use utils::{format_size, format_timestamp};
pub use walker::{TreeWalker, WalkerConfig};
