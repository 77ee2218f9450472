//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`InputError`], [`LookupError`], [`ExportError`],
//!   [`HistoryError`]) for detailed handling at the point of failure
//! - All errors implement `std::error::Error` for compatibility
//!
//! Per the degrade policy, a [`LookupError`] never aborts album assembly —
//! it only surfaces here when a lookup is requested on its own (e.g. the
//! `lookup` CLI command).

use crate::assemble::InputError;
use crate::export::ExportError;
use crate::history::HistoryError;
use crate::lookup::LookupError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid generation request
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Artist metadata lookup failure
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Album export failure
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// History log failure
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
