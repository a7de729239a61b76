//! XLSX encoding.

use polars::prelude::DataFrame;
use rust_xlsxwriter::Workbook;

use kasp_common::{column_names, column_values};
use kasp_model::OutputOptions;

use crate::error::{OutputError, Result};
use crate::naming::XLSX_MIME_TYPE;

/// Rows per worksheet, header row included.
pub const MAX_ROWS: usize = 1_048_576;
/// Columns per worksheet.
pub const MAX_COLUMNS: usize = 16_384;

/// Turns a finished table into downloadable spreadsheet bytes.
///
/// Implementations write one sheet whose first row holds the column names,
/// followed by one row per table row. There is no index column and null
/// cells are left blank.
pub trait SpreadsheetEncoder {
    fn encode(&self, table: &DataFrame) -> Result<Vec<u8>>;

    /// MIME type of the encoded bytes.
    fn mime_type(&self) -> &'static str {
        XLSX_MIME_TYPE
    }

    /// File extension of the encoded bytes, without the dot.
    fn extension(&self) -> &'static str {
        "xlsx"
    }
}

/// Single-sheet XLSX encoder backed by `rust_xlsxwriter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XlsxEncoder {
    sheet_name: String,
}

impl XlsxEncoder {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    pub fn from_options(options: &OutputOptions) -> Self {
        Self::new(options.sheet_name.clone())
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl Default for XlsxEncoder {
    fn default() -> Self {
        Self::from_options(&OutputOptions::default())
    }
}

impl SpreadsheetEncoder for XlsxEncoder {
    fn encode(&self, table: &DataFrame) -> Result<Vec<u8>> {
        check_dimensions(table)?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (index, name) in column_names(table).iter().enumerate() {
            let col = column_index(index)?;
            worksheet.write_string(0, col, name)?;
            for (offset, value) in column_values(table, name)?.iter().enumerate() {
                let Some(value) = value else {
                    continue;
                };
                worksheet.write_string(row_index(offset + 1)?, col, value)?;
            }
        }

        let bytes = workbook.save_to_buffer()?;
        tracing::debug!(
            sheet = %self.sheet_name,
            rows = table.height(),
            columns = table.width(),
            bytes = bytes.len(),
            "encoded workbook"
        );
        Ok(bytes)
    }
}

fn check_dimensions(table: &DataFrame) -> Result<()> {
    if table.width() == 0 {
        return Err(OutputError::EmptyTable);
    }
    if table.width() > MAX_COLUMNS {
        return Err(OutputError::TooManyColumns {
            columns: table.width(),
            limit: MAX_COLUMNS,
        });
    }
    // One row is taken by the header.
    if table.height() >= MAX_ROWS {
        return Err(OutputError::TooManyRows {
            rows: table.height(),
            limit: MAX_ROWS - 1,
        });
    }
    Ok(())
}

fn column_index(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| OutputError::TooManyColumns {
        columns: index + 1,
        limit: MAX_COLUMNS,
    })
}

fn row_index(index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| OutputError::TooManyRows {
        rows: index,
        limit: MAX_ROWS - 1,
    })
}
