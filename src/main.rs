//! CLI entry point for dirmap

use std::env;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use dirmap::{ReportFormatter, TreeWalker, WalkerConfig, print_summary};

const DEFAULT_OUTPUT: &str = "Project_Directory.md";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Generate a markdown map of the current directory tree")]
#[command(version)]
struct Args {
    /// Output file name for the generated report
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Basename of the invoked program, used for the self-exclusion rule.
fn invoked_basename() -> String {
    env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    let root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("dirmap: cannot determine current directory: {}", e);
            process::exit(1);
        }
    };

    // The report never lists the tool itself or the file it is about to
    // write; both are matched by exact basename.
    let output_basename = Path::new(&args.output)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.output.clone());
    let config = WalkerConfig {
        excluded_basenames: vec![invoked_basename(), output_basename],
    };

    let tree = match TreeWalker::new(config).walk(&root) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("dirmap: cannot read '{}': {}", root.display(), e);
            process::exit(1);
        }
    };

    let report = ReportFormatter::new().format(&tree);

    if let Err(e) = fs::write(&args.output, &report) {
        eprintln!("dirmap: cannot write '{}': {}", args.output, e);
        process::exit(1);
    }

    if let Err(e) = print_summary(&tree, &args.output, use_color) {
        eprintln!("dirmap: error writing output: {}", e);
        process::exit(1);
    }
}
