//! CLI entry point for hollow

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use hollow::{Reporter, ScanConfig, Scanner};
use tracing::{Level, debug};

#[derive(Parser, Debug)]
#[command(name = "hollow")]
#[command(about = "Find empty files in a specified directory.")]
struct Args {
    /// The directory where the search for empty files begins
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: PathBuf,

    /// Recursively search subdirectories
    #[arg(short = 'r', long = "recurse")]
    recurse: bool,
}

/// Diagnostics go to stderr so stdout carries only scan results.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let scanner = Scanner::new(ScanConfig::new(args.recurse));
    let mut reporter = Reporter::new(io::stdout().lock());

    // Per-file and per-directory failures are already reported; they do not
    // change the exit status.
    match reporter.report_all(scanner.scan(&args.directory)) {
        Ok(summary) => debug!(?summary, "scan finished"),
        Err(e) => {
            eprintln!("hollow: error writing output: {}", e);
            process::exit(1);
        }
    }
}
