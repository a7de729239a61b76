//! Instrument export ingestion.
//!
//! Genotyping plate exports start with a free-form preamble (run settings,
//! instrument metadata) before the actual table. A line containing the
//! marker token `Data` precedes the column header row; everything after it is
//! delimited text.
//!
//! # Example
//!
//! ```ignore
//! use kasp_ingest::load_table;
//! use kasp_model::IngestOptions;
//!
//! let bytes = std::fs::read("plate_export.csv")?;
//! let df = load_table(&bytes, &IngestOptions::default())?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{HeaderLocation, decode_export, load_table, locate_header, read_table};
