use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by tg-chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// An export document could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The given export directory does not exist.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// No `messages{N}.html` files were found under the given directory.
    #[error("No export files found in {0}")]
    NoExportFiles(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the tg-chart crates.
pub type Result<T> = std::result::Result<T, ChartError>;
