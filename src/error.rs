//! Crate-level error types.
//!
//! [`MoversError`] unifies every failure source behind a single enum so
//! callers can match on the variant they care about while still using the
//! `?` operator for propagation. The fetch variants carry a display-ready
//! cause; the poller forwards that text to the status bar unchanged.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoversError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum MoversError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The exchange-metadata request failed (transport or non-200 status).
    #[error("failed to fetch exchange metadata: {0}")]
    MetadataFetch(String),

    /// Metadata contained no trading perpetual with the configured quote
    /// suffix.
    #[error("no valid perpetual instruments after filtering")]
    NoValidInstruments,

    /// The 24h ticker request failed (transport or non-200 status).
    #[error("failed to fetch 24h ticker statistics: {0}")]
    TickerFetch(String),

    /// No ticker survived the valid-instrument and volume filters.
    #[error("no ticker statistics for any valid instrument")]
    NoValidTickers,

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or log-file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// Catch-all for parsing and runtime faults.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}
