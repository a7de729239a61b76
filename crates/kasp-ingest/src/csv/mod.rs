//! Header location and CSV reading.

mod header;
mod reader;

pub use header::{HeaderLocation, decode_export, locate_header};
pub use reader::{load_table, read_table};
