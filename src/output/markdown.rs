//! Markdown report formatting
//!
//! This module provides `ReportFormatter` which renders a scanned `DirNode`
//! tree into the markdown report: header, statistics block, fenced tree and
//! icon legend.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::icons::{self, DEFAULT_ICON, DIR_ICON};
use crate::tree::{DirNode, FileEntry, FileStatus, format_size, format_timestamp};

/// Maximum extensions shown per legend line before truncating with "etc.".
const LEGEND_GROUP_LIMIT: usize = 5;

/// Renders a scanned tree into markdown report text.
pub struct ReportFormatter {
    generated_at: DateTime<Local>,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self {
            generated_at: Local::now(),
        }
    }

    /// Use a fixed generation timestamp instead of the current time.
    pub fn with_timestamp(generated_at: DateTime<Local>) -> Self {
        Self { generated_at }
    }

    /// Render the full report for `tree`.
    pub fn format(&self, tree: &DirNode) -> String {
        let mut out = String::new();

        out.push_str(&format!("# Project Directory: {}\n\n", tree.name));
        out.push_str(&format!(
            "Directory structure generated on {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        out.push_str(&format!("* Total files: {}\n", tree.file_count()));
        out.push_str(&format!("* Total directories: {}\n", tree.dir_count()));
        out.push_str(&format!("* Total size: {}\n\n", format_size(tree.total_size())));

        out.push_str("```\n");
        out.push_str(&format!("{} **{}/**\n", DIR_ICON, tree.name));
        self.push_children(&mut out, tree, "");
        out.push_str("```\n\n");

        self.push_legend(&mut out);
        out
    }

    /// Pre-order walk: all subdirectories of a node, then all of its files.
    fn push_children(&self, out: &mut String, dir: &DirNode, prefix: &str) {
        let total = dir.subdirs.len() + dir.files.len();

        for (i, subdir) in dir.subdirs.iter().enumerate() {
            let is_last = i + 1 == total;
            let (connector, child_prefix) = connectors(prefix, is_last);
            out.push_str(&format!(
                "{}{}{} **{}/**\n",
                prefix, connector, DIR_ICON, subdir.name
            ));
            self.push_children(out, subdir, &child_prefix);
        }

        for (i, file) in dir.files.iter().enumerate() {
            let is_last = dir.subdirs.len() + i + 1 == total;
            let connector = if is_last { "└── " } else { "├── " };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&format_file_row(file));
            out.push('\n');
        }
    }

    fn push_legend(&self, out: &mut String) {
        out.push_str("## Icon Legend\n\n");
        out.push_str(&format!("{} - Directory\n", DIR_ICON));

        for (icon, exts) in icons::legend_groups() {
            let listed = if exts.len() > LEGEND_GROUP_LIMIT {
                format!("{}, etc.", exts[..LEGEND_GROUP_LIMIT].join(", "))
            } else {
                exts.join(", ")
            };
            out.push_str(&format!("{} - {}\n", icon, listed));
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn connectors(prefix: &str, is_last: bool) -> (&'static str, String) {
    if is_last {
        ("└── ", format!("{}    ", prefix))
    } else {
        ("├── ", format!("{}│   ", prefix))
    }
}

/// A single file row: icon, name with the extension set apart, then size and
/// mtime. Entries that could not be stat'ed get a placeholder instead.
fn format_file_row(file: &FileEntry) -> String {
    match file.status {
        FileStatus::Available { size, modified } => format!(
            "{} {} ({}, {})",
            icons::icon_for_name(&file.name),
            display_name(&file.name),
            format_size(size),
            format_timestamp(modified)
        ),
        FileStatus::Unavailable => format!("{} {} (unavailable)", DEFAULT_ICON, file.name),
    }
}

/// `name.ext` becomes ``name`.ext` `` so the extension stands out in the
/// rendered tree; extensionless names pass through untouched.
fn display_name(name: &str) -> String {
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => format!(
            "{}`.{}`",
            stem.to_string_lossy(),
            ext.to_string_lossy()
        ),
        _ => name.to_string(),
    }
}
