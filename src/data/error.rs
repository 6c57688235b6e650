use thiserror::Error;

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Errors produced by the load → derive → filter → sample pipeline.
#[derive(Debug, Error)]
pub enum DataError {
    /// The review store is missing or unreadable. Fatal to the Home view.
    /// Carries the flattened context chain from the loader.
    #[error("review store unavailable: {0}")]
    Unavailable(String),

    /// A single row failed derivation (bad or missing `created` timestamp).
    #[error("row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// A sample was requested from a filtered set smaller than the sample size.
    #[error("not enough reviews to sample: wanted {wanted}, have {available}")]
    InsufficientData { wanted: usize, available: usize },
}

impl DataError {
    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        DataError::MalformedRecord {
            row,
            reason: reason.into(),
        }
    }
}
