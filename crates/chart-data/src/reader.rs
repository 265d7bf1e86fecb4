//! Export file discovery and loading for tg-chart.
//!
//! Telegram Desktop writes a chat export as `messages1.html`,
//! `messages2.html`, ... with no gaps. Discovery follows that contract: walk
//! the indices upward from 1 and stop at the first missing file, so a gap at
//! N hides messages{N+1}.html even when it exists.

use std::path::{Path, PathBuf};

use chart_core::error::{ChartError, Result};
use chart_core::models::ScanState;
use tracing::{debug, warn};

use crate::extractor;

// ── Public API ────────────────────────────────────────────────────────────────

/// Path of the export document with the given 1-based index.
pub fn export_file_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("messages{}.html", index))
}

/// Find the contiguous `messages{N}.html` sequence under `dir`, in index
/// order, stopping at the first missing index.
///
/// `max_files` bounds the walk so a pathological filesystem cannot keep it
/// going forever; hitting the ceiling logs a warning and returns what was
/// found so far.
pub fn export_files(dir: &Path, max_files: u32) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Export path does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for index in 1..=max_files {
        let path = export_file_path(dir, index);
        if !path.exists() {
            return files;
        }
        files.push(path);
    }

    warn!(
        "Stopped export discovery at the {} file ceiling in {}",
        max_files,
        dir.display()
    );
    files
}

/// Scan a whole export directory into a [`ScanState`].
///
/// Documents are processed strictly in index order: the date context set by
/// the last separator of one file applies to the leading messages of the
/// next. An unreadable document aborts the scan with
/// [`ChartError::FileRead`].
pub fn scan_export(dir: &Path, max_files: u32) -> Result<ScanState> {
    if !dir.is_dir() {
        return Err(ChartError::DirectoryNotFound(dir.to_path_buf()));
    }

    let files = export_files(dir, max_files);
    if files.is_empty() {
        return Err(ChartError::NoExportFiles(dir.to_path_buf()));
    }

    let mut state = ScanState::new();
    for path in &files {
        let html = std::fs::read_to_string(path).map_err(|source| ChartError::FileRead {
            path: path.clone(),
            source,
        })?;

        extractor::scan_document(&html, &mut state);

        debug!(
            "File {}: {} messages total, {} years so far",
            path.display(),
            state.total_messages(),
            state.years.len()
        );
    }

    debug!(
        "Scanned {} files: {} messages across {} years",
        files.len(),
        state.total_messages(),
        state.years.len()
    );

    Ok(state)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
