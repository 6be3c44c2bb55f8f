//! Error types for loading, reporting and configuration.

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type for report operations
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A required column is missing, a value cannot be parsed as its declared
    /// type, or a loaded collection violates a data-model invariant.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataframe error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReportError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        ReportError::MalformedInput(msg.into())
    }

    /// True for the only error kind the record store itself raises.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ReportError::MalformedInput(_))
    }
}
