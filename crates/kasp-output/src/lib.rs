//! Spreadsheet output for the results wizard.
//!
//! - **xlsx**: the [`SpreadsheetEncoder`] contract and its `rust_xlsxwriter`
//!   implementation
//! - **naming**: download file names and the [`SpreadsheetExport`] bundle
//! - **preview**: plain-text table previews for the host

mod error;
pub mod naming;
pub mod preview;
pub mod xlsx;

pub use error::{OutputError, Result};
pub use naming::{SpreadsheetExport, TIMESTAMP_FORMAT, XLSX_MIME_TYPE, export_file_name};
pub use preview::render_preview;
pub use xlsx::{MAX_COLUMNS, MAX_ROWS, SpreadsheetEncoder, XlsxEncoder};
