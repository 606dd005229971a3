//! Console summary printed after the report is written

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{DirNode, format_size};

/// Print a short statistics summary and the output location to stdout.
pub fn print_summary(tree: &DirNode, output_path: &str, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    stdout.set_color(&bold)?;
    writeln!(stdout, "Directory Report")?;
    stdout.reset()?;
    writeln!(stdout, "────────────────")?;

    writeln!(stdout, "Files:        {}", tree.file_count())?;
    writeln!(stdout, "Directories:  {}", tree.dir_count())?;
    writeln!(stdout, "Total size:   {}", format_size(tree.total_size()))?;
    writeln!(stdout)?;

    write!(stdout, "Written to ")?;
    let mut green = ColorSpec::new();
    green.set_fg(Some(Color::Green));
    stdout.set_color(&green)?;
    writeln!(stdout, "{}", output_path)?;
    stdout.reset()?;

    Ok(())
}
