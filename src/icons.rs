//! Static extension-to-icon mapping and legend grouping
//!
//! Extensions are keyed lowercase with a leading dot; anything not in the
//! table falls back to the generic document glyph.

use std::collections::BTreeMap;
use std::path::Path;

/// Glyph used for every directory entry.
pub const DIR_ICON: &str = "📁";

/// Fallback glyph for unmapped extensions and extensionless files.
pub const DEFAULT_ICON: &str = "📄";

const ICON_TABLE: &[(&str, &str)] = &[
    (".py", "🐍"),
    (".rs", "🦀"),
    (".js", "📜"),
    (".html", "🌐"),
    (".css", "🎨"),
    (".json", "📋"),
    (".md", "📝"),
    (".txt", "📄"),
    (".pdf", "📑"),
    (".jpg", "🖼️"),
    (".jpeg", "🖼️"),
    (".png", "🖼️"),
    (".gif", "🖼️"),
    (".svg", "🖼️"),
    (".mp3", "🎵"),
    (".mp4", "🎬"),
    (".zip", "📦"),
    (".tar", "📦"),
    (".gz", "📦"),
    (".rar", "📦"),
    (".7z", "📦"),
    (".doc", "📃"),
    (".docx", "📃"),
    (".xls", "📊"),
    (".xlsx", "📊"),
    (".ppt", "📽️"),
    (".pptx", "📽️"),
    (".sh", "⚙️"),
    (".bat", "⚙️"),
    (".exe", "⚙️"),
    (".dll", "🔌"),
    (".so", "🔌"),
    (".h", "📚"),
    (".c", "📚"),
    (".cpp", "📚"),
    (".java", "☕"),
    (".class", "☕"),
    (".rb", "💎"),
    (".php", "🐘"),
    (".sql", "🗄️"),
    (".db", "🗄️"),
    (".xml", "📰"),
    (".yml", "📰"),
    (".yaml", "📰"),
    (".toml", "📰"),
    (".ini", "⚙️"),
    (".cfg", "⚙️"),
    (".conf", "⚙️"),
    (".log", "📜"),
];

/// Look up the icon for a dotted, lowercase extension.
pub fn icon_for_extension(ext: &str) -> Option<&'static str> {
    ICON_TABLE
        .iter()
        .find(|&&(e, _)| e == ext)
        .map(|&(_, icon)| icon)
}

/// Icon for a file name, matched case-insensitively on its extension.
pub fn icon_for_name(name: &str) -> &'static str {
    Path::new(name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .and_then(|ext| icon_for_extension(&ext))
        .unwrap_or(DEFAULT_ICON)
}

/// All known extensions grouped by glyph, groups sorted by glyph and each
/// extension list sorted. This is the data behind the report's icon legend.
pub fn legend_groups() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut groups: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for &(ext, icon) in ICON_TABLE {
        groups.entry(icon).or_default().push(ext);
    }
    groups
        .into_iter()
        .map(|(icon, mut exts)| {
            exts.sort_unstable();
            (icon, exts)
        })
        .collect()
}
