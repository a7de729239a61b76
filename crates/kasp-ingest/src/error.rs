//! Error types for export ingestion.

use thiserror::Error;

/// Errors that can occur while loading an instrument export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No line contains the header marker.
    #[error("header line containing '{marker}' was not found; check the contents of the CSV file")]
    HeaderNotFound { marker: String },

    /// The tabular section could not be parsed.
    #[error("failed to parse CSV data: {message}")]
    Parse { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
