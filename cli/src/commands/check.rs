//! Check Command
//!
//! Verify checksums from file (like md5sum -c).

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Outcome of a check run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Lines that named a file.
    pub total: usize,
    /// Files that were unreadable or did not match.
    pub failed: usize,
}

/// Split a `"hash  filename"` line (two spaces). `None` for malformed lines.
pub fn parse_check_line(line: &str) -> Option<(&str, &str)> {
    let (expected_hash, file_path) = line.split_once("  ")?;
    let file_path = file_path.trim();
    if file_path.is_empty() {
        return None;
    }
    Some((expected_hash.trim(), file_path))
}

/// Check one entry. `Ok(false)` is a digest mismatch; `Err` covers bad hex and unreadable files.
fn check_entry(expected_hash: &str, file_path: &str) -> Result<bool> {
    let expected = md4_hash::from_hex(expected_hash)?;
    let data = std::fs::read(file_path)?;
    Ok(md4_hash::verify(&data, &expected))
}

/// Verify every entry read from `reader`, writing one status line per entry to `out`.
pub fn check_lines<R: BufRead, W: Write>(reader: R, mut out: W) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((expected_hash, file_path)) = parse_check_line(line) else {
            tracing::warn!(line, "invalid checksum line format");
            continue;
        };
        summary.total += 1;

        match check_entry(expected_hash, file_path) {
            Ok(true) => writeln!(out, "{file_path}: OK")?,
            Ok(false) => {
                writeln!(out, "{file_path}: FAILED")?;
                summary.failed += 1;
            }
            Err(e) => {
                writeln!(out, "{file_path}: FAILED ({e})")?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path) -> Result<CheckSummary> {
    let file = std::fs::File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let summary = check_lines(BufReader::new(file), std::io::stdout().lock())?;
    tracing::info!(
        total = summary.total,
        failed = summary.failed,
        "checksum verification finished"
    );

    println!();
    if summary.failed == 0 {
        println!("All {} checksums verified", summary.total);
    } else {
        eprintln!(
            "WARNING: {} of {} checksums did NOT match",
            summary.failed, summary.total
        );
    }

    Ok(summary)
}
