//! Errors raised while reading, writing, and patching documents on disk.
//!
//! Numbering itself never fails; everything here belongs to the file handling around it.

use std::path::PathBuf;
use thiserror::Error;

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
/// Failure while moving documents or edit plans between disk and memory.
pub enum Error {
    /// A document or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Location that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A document could not be written back.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Location that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Output for the user could not be written.
    #[error("failed to write output: {0}")]
    Output(std::io::Error),

    /// An edit plan was not valid JSON for this tool.
    #[error("invalid edit plan: {0}")]
    Plan(#[from] serde_json::Error),

    /// A planned edit no longer matches the file it targets.
    #[error("{file}:{line}: expected {expected:?}, found {found:?}")]
    StaleEdit {
        /// File the edit targets.
        file: String,
        /// One-based line number of the edit.
        line: usize,
        /// Content the plan recorded before the edit.
        expected: String,
        /// Content currently on disk.
        found: String,
    },

    /// A planned edit points past the end of its file.
    #[error("{file}:{line}: line does not exist")]
    MissingLine {
        /// File the edit targets.
        file: String,
        /// One-based line number of the edit.
        line: usize,
    },
}
