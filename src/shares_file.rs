//! Newline-delimited share files
//!
//! One tagged share per line. Writing appends without a trailing newline;
//! reading skips blank lines, so files ending in `\n` are accepted too.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;
use zeroize::Zeroizing;

use crate::share::TaggedShare;

/// Append shares to `path`, one per line, creating the file if needed
///
/// If the file already has content that does not end in a newline, a newline
/// is written first so the previous last line stays intact.
///
/// # Errors
/// Returns an error if the file cannot be opened or written
pub fn write_shares(path: &Path, shares: &[TaggedShare]) -> Result<()> {
    let existing_len = fs::metadata(path).map_or(0, |meta| meta.len());
    let needs_separator = existing_len > 0 && !ends_with_newline(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open shares file {}", path.display()))?;

    let mut contents = Zeroizing::new(String::new());
    if needs_separator {
        contents.push('\n');
    }
    for (idx, share) in shares.iter().enumerate() {
        if idx > 0 {
            contents.push('\n');
        }
        contents.push_str(&share.to_string());
    }

    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write shares file {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush shares file {}", path.display()))?;

    info!(count = shares.len(), path = %path.display(), "wrote shares");
    Ok(())
}

/// Read the non-blank lines of a share file, trimmed
///
/// # Errors
/// Returns an error if the file cannot be read or contains no shares
pub fn read_shares(path: &Path) -> Result<Vec<String>> {
    let contents = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read shares file {}", path.display()))?,
    );

    let shares: Vec<String> = contents
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    if shares.is_empty() {
        bail!("No shares found in {}", path.display());
    }

    info!(count = shares.len(), path = %path.display(), "read shares");
    Ok(shares)
}

fn ends_with_newline(path: &Path) -> Result<bool> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read shares file {}", path.display()))?;
    Ok(bytes.last() == Some(&b'\n'))
}
