//! Error types for spreadsheet output.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors raised while encoding or previewing a table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The workbook writer rejected the data.
    #[error("spreadsheet encoding failed: {0}")]
    Xlsx(#[from] XlsxError),

    /// The table has no columns to write.
    #[error("the table has no columns to write")]
    EmptyTable,

    /// The table does not fit on one worksheet.
    #[error("the table has {rows} rows but a worksheet holds at most {limit}")]
    TooManyRows { rows: usize, limit: usize },

    /// The table does not fit on one worksheet.
    #[error("the table has {columns} columns but a worksheet holds at most {limit}")]
    TooManyColumns { columns: usize, limit: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
