//! Listing and batched content emission.
//!
//! The content stream wraps each file between START/END marker lines that a
//! downstream tool splits on, so the exact marker text and the blank line
//! before each marker must not change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::telemetry::{LogMessage, log_with_context};


/// Half-open index window `[start, end)` into a file list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitRange {
    /// First index to emit (inclusive).
    pub start: usize,

    /// Index to stop before. `None` means the end of the list.
    pub end: Option<usize>,
}

impl EmitRange {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// The requested end with the default applied but not yet clamped.
    pub fn resolve_end(&self, len: usize) -> usize {
        self.end.unwrap_or(len)
    }

    /// The indices that will actually be emitted for a list of `len` files.
    ///
    /// The end is clamped to `len`; a start at or past the end yields an
    /// empty range rather than an error.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let end = self.resolve_end(len).min(len);
        self.start.min(end)..end
    }
}

/// Counts from one content-emission pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Files written as START/END blocks
    pub emitted: usize,
    /// Files that produced an error line instead
    pub failed: usize,
}

/// One row of the `--list` output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub index: usize,
    pub path: PathBuf,
}

/// Writes `<index>: <path>` for every file, ignoring any range.
pub fn list_files<W: Write>(out: &mut W, files: &[PathBuf]) -> Result<()> {
    for (index, path) in files.iter().enumerate() {
        writeln!(out, "{}: {}", index, path.display())?;
    }
    Ok(())
}

/// Writes the full listing as a pretty-printed JSON array of [`ListEntry`].
pub fn list_files_json<W: Write>(out: &mut W, files: &[PathBuf]) -> Result<()> {
    let entries: Vec<ListEntry> = files
        .iter()
        .enumerate()
        .map(|(index, path)| ListEntry {
            index,
            path: path.clone(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries).context("Failed to serialize file list")?;
    writeln!(out)?;
    Ok(())
}

/// Emits the contents of the files selected by `range`.
///
/// A progress line naming the requested window, the total count and `root`
/// comes first. Each readable file is then written as
///
/// ```text
///
/// --- START FILE: <path> ---
/// <content>
///
/// --- END FILE: <path> ---
/// ```
///
/// A file that cannot be read or is not valid UTF-8 is reported with a
/// single `Error reading <path>: <error>` line and the loop moves on.
///
/// # Errors
///
/// Only failures writing to `out` are returned.
pub fn emit_files<W: Write>(
    out: &mut W,
    files: &[PathBuf],
    range: EmitRange,
    root: &Path,
) -> Result<EmitSummary> {
    writeln!(
        out,
        "Processing files {} to {} of {} in {}...",
        range.start,
        range.resolve_end(files.len()),
        files.len(),
        root.display()
    )?;

    let mut summary = EmitSummary::default();

    for path in &files[range.bounds(files.len())] {
        match read_text(path) {
            Ok(content) => {
                write!(out, "\n--- START FILE: {} ---\n", path.display())?;
                writeln!(out, "{}", content)?;
                write!(out, "\n--- END FILE: {} ---\n", path.display())?;
                summary.emitted += 1;
            }
            Err(e) => {
                writeln!(out, "Error reading {}: {:#}", path.display(), e)?;
                log_with_context(
                    log::Level::Warn,
                    LogMessage {
                        message: format!("Skipping unreadable file: {:#}", e),
                        module: "emit",
                        context: Some(vec![("file_path", path.display().to_string())]),
                    },
                );
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Reads a whole file as UTF-8 text. The handle is closed before returning.
pub fn read_text(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open file {}", path.display()))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read file {}", path.display()))?;

    Ok(content)
}
