//! Data model shared by the KASP results crates.
//!
//! - **columns**: well-known column names of the instrument export and the
//!   columns the wizard derives
//! - **mapping**: the per-daughter-plate `Placa`/`Teste` mapping
//! - **options**: wizard configuration
//! - **notice**: user-visible messages raised while handling a step

pub mod columns;
pub mod mapping;
pub mod notice;
pub mod options;

pub use mapping::{PlateTest, PlateTestMapping};
pub use notice::{Notice, NoticeLevel};
pub use options::{IngestOptions, OutputOptions, WizardOptions};
