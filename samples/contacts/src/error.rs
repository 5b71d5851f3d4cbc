//! Error types for the contacts editor.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the contacts editor.
#[derive(Debug, Error)]
pub enum ContactsError {
    /// The record file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The record was not valid JSON for a contact.
    #[error("invalid record: {0}")]
    Parse(#[from] serde_json::Error),

    /// Halving hit an odd number before finishing.
    #[error("{input} cannot be halved twice")]
    NotHalvable {
        /// Number that was requested
        input: i64,
    },
}
