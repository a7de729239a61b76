//! Error types for table transforms.

use thiserror::Error;

/// Errors raised by the transform steps.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the step depends on is absent.
    #[error("column '{column}' was not found")]
    MissingColumn { column: String },

    /// The submitted mapping has no entry for an observed daughter plate.
    #[error("no Placa/Teste mapping was provided for DaughterPlate '{plate}'")]
    UnmappedPlate { plate: String },

    /// The table could not be reshaped.
    #[error("pivot failed: {message}")]
    Pivot { message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl TransformError {
    pub(crate) fn missing(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        assert_eq!(
            TransformError::missing("MasterWell").to_string(),
            "column 'MasterWell' was not found"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Call".into());
        let err: TransformError = polars_err.into();
        assert!(matches!(err, TransformError::DataFrame { .. }));
    }
}
