//! Command-line interface for code-collector.
//!
//! Consolidates a project directory into one markdown file for a language model.
//! Diagnostics (skipped files, bad patterns) go to stderr through `tracing`.

use clap::Parser;
use code_collector::{CollectSummary, CollectorBuilder, CollectorOptions, collect};
use std::io;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// code-collector — consolidate project code into a single markdown file
#[derive(Parser)]
#[command(name = "code-collector", version, about, long_about = None)]
struct Cli {
    /// Project directory to consolidate
    target_directory: PathBuf,

    /// Output file (created or overwritten)
    output_file: PathBuf,

    /// Do not include the directory tree in the output
    #[arg(long)]
    no_tree: bool,

    /// File or directory names to ignore
    #[arg(long, num_args = 0.., value_name = "NAME")]
    ignore_files: Vec<String>,

    /// File suffixes to ignore (e.g. .log .tmp)
    #[arg(long, num_args = 0.., value_name = "SUFFIX")]
    ignore_extensions: Vec<String>,

    /// Extra gitignore-style pattern (can be repeated)
    #[arg(long = "pattern", value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Disable .gitignore handling
    #[arg(long)]
    no_gitignore: bool,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn into_options(self) -> (CollectorOptions, bool) {
        let options = CollectorBuilder::new(self.target_directory)
            .output(self.output_file)
            .include_tree(!self.no_tree)
            .respect_gitignore(!self.no_gitignore)
            .ignore_names(self.ignore_files)
            .ignore_extensions(self.ignore_extensions)
            .patterns(self.patterns)
            .build();
        (options, self.summary)
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let (options, print_summary) = cli.into_options();

    match collect(options) {
        Ok(summary) => {
            if print_summary {
                output_summary(&summary);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn output_summary(summary: &CollectSummary) {
    let json = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    println!("{}", json);
}
