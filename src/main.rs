//! CLI entry point for koala

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use koala::{Diagnostics, Error, StyleSelection, WalkerConfig, aggregate, style_list, write_line};
use tracing_subscriber::EnvFilter;

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

/// Determine whether diagnostics on stderr should be colored.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "koala")]
#[command(about = "List the files under one or more directories on a single line")]
#[command(version)]
struct Args {
    /// Directories to list (default: the current directory)
    roots: Vec<PathBuf>,

    /// Show hidden (dot) files and descend into hidden directories
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show directories too (they are always descended into)
    #[arg(short = 'd', long = "dirs")]
    dirs: bool,

    /// Don't strip the root from the listed paths
    #[arg(short = 's', long = "no-strip")]
    no_strip: bool,

    /// Output style: lisp, space, comma, null (use help to see the list)
    #[arg(short = 'o', long = "output", value_name = "STYLE", default_value = "space")]
    output: String,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Control color of warnings and errors: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log walking details to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Install a stderr log subscriber when asked for by `-v` or `KOALA_LOG`.
fn setup_tracing(verbose: u8) {
    let filter = match std::env::var("KOALA_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => match verbose {
            0 => return,
            1 => EnvFilter::new("koala=debug"),
            _ => EnvFilter::new("koala=trace"),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}

/// The current directory, or `.` with a warning if it cannot be read.
fn default_root(diagnostics: &mut Diagnostics) -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        diagnostics.warning(Error::CurrentDir(e));
        PathBuf::from(".")
    })
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let mut diagnostics = Diagnostics::new(should_use_color(args.color));

    // Settle the style before touching the filesystem
    let style = match args.output.parse::<StyleSelection>() {
        Ok(StyleSelection::Style(style)) => style,
        Ok(StyleSelection::Help) => {
            print!("{}", style_list());
            return;
        }
        Err(e) => {
            diagnostics.error(e);
            process::exit(1);
        }
    };

    let roots = if args.roots.is_empty() {
        vec![default_root(&mut diagnostics)]
    } else {
        args.roots
    };

    let config = WalkerConfig {
        include_hidden: args.all,
        include_dirs: args.dirs,
        strip_root: !args.no_strip,
        max_depth: args.level,
        ignore_patterns: args.ignore,
    };

    let entries = aggregate(&roots, &config, |e| diagnostics.error(e));

    if let Err(e) = write_line(&mut io::stdout().lock(), &style.render(&entries)) {
        diagnostics.error(format!("error writing output: {}", e));
        process::exit(1);
    }
}
