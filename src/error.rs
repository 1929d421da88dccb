//! Error types for pagesieve.
//!
//! This module defines the error types returned by scraping operations.
//! Zero-match lookups are deliberately *not* errors: they degrade to empty
//! results with a logged diagnostic so scheduled runs keep going.

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page retrieval failed (network, timeout, HTTP status or body read).
    #[error("page fetch failed: {0}")]
    Fetch(String),

    /// An operation needed a document, but none has been fetched yet
    /// (or the last fetch failed and left the scraper without one).
    #[error("no document loaded")]
    NoDocument,

    /// An indexed selector step requested a match that does not exist.
    #[error("no match at index {index} for query `{query}`")]
    IndexOutOfRange {
        /// CSS query the step evaluated.
        query: String,
        /// Requested zero-based match index.
        index: usize,
    },

    /// A scheduled task was configured with a zero-length interval.
    #[error("schedule interval must be greater than zero")]
    InvalidInterval,

    /// Log or snapshot writing failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
