//! Hash Command
//!
//! String, prompt and file hashing. Files are hashed concurrently via Rayon;
//! each file's digest is still a single serial pass.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const PROMPT: &str = "Enter the string to hash: ";

/// Format a string digest line: `'text' -> hex`.
pub fn render_text(text: &str) -> String {
    format!("'{}' -> {}", text, md4_hash::digest_str_hex(text))
}

/// Hash a string given on the command line.
pub fn hash_text(text: &str) -> Result<()> {
    tracing::debug!(bytes = text.len(), "hashing string argument");
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render_text(text))?;
    Ok(())
}

/// Ask for a string on `output`, read one line from `input`, print its digest.
pub fn prompt_and_hash<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read string from stdin")?;
    let text = line.strip_suffix('\n').unwrap_or(line.as_str());
    let text = text.strip_suffix('\r').unwrap_or(text);

    tracing::debug!(bytes = text.len(), "hashing prompted string");
    writeln!(output, "\n{}", render_text(text))?;
    Ok(())
}

/// Read a whole file and return its hex digest.
pub fn hash_file(path: &Path) -> Result<String> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "hashed file");
    Ok(md4_hash::digest_hex(&data))
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    // Indexed collect keeps argument order
    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|file_path| (file_path, hash_file(file_path)))
        .collect();

    let mut stdout = std::io::stdout().lock();
    let mut failed = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(hex_hash) => writeln!(stdout, "{}  {}", hex_hash, file_path.display())?,
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {} file(s)", failed);
    }

    Ok(())
}
