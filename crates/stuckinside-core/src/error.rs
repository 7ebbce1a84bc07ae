//! Domain error types.

/// Errors from domain-level parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A date field was neither a compact `YYYYMMDD` string nor the
    /// literal `"null"` sentinel, or named an impossible calendar date.
    #[error("invalid policy date {value:?}: {reason}")]
    InvalidDate {
        /// The offending input, as received.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
