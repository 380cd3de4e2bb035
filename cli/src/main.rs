//! md4sum CLI
//!
//! MD4 digest command-line tool.

mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{check_mode, hash_files, hash_text, prompt_and_hash};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "md4sum")]
#[command(about = "MD4 message digest (RFC 1320)", long_about = None)]
#[command(after_help = "Note: if both a string and files are provided, only the string is hashed")]
#[command(version)]
struct Cli {
    /// The string to hash
    #[arg(value_name = "STRING")]
    string: Option<String>,

    /// File to hash (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Verify checksums from file (like md5sum -c)
    #[arg(
        short = 'c',
        long = "check",
        value_name = "SUMFILE",
        conflicts_with_all = ["string", "files"]
    )]
    check: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What a single invocation does.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    Check(PathBuf),
    Text(String),
    Files(Vec<PathBuf>),
    Prompt,
}

/// `--check` stands alone. Otherwise a string wins over files; with neither, prompt on stdin.
fn select_request(check: Option<PathBuf>, string: Option<String>, files: Vec<PathBuf>) -> Request {
    match (check, string, files) {
        (Some(sum_file), _, _) => Request::Check(sum_file),
        (None, Some(text), _) => Request::Text(text),
        (None, None, files) if !files.is_empty() => Request::Files(files),
        (None, None, _) => Request::Prompt,
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match select_request(cli.check, cli.string, cli.files) {
        Request::Check(sum_file) => {
            let summary = check_mode(&sum_file)?;
            if summary.failed > 0 {
                std::process::exit(1);
            }
        }
        Request::Text(text) => hash_text(&text)?,
        Request::Files(files) => hash_files(&files)?,
        Request::Prompt => prompt_and_hash(std::io::stdin().lock(), std::io::stdout())?,
    }

    Ok(())
}
