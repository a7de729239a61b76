//! Shared utilities for the KASP results crates.
//!
//! Every table in the wizard is a Polars `DataFrame` whose columns are read as
//! text, so most helpers here deal with pulling string values out of columns
//! and building string columns back.

pub mod frame;

pub use frame::{column_names, column_values, has_column, string_column};
