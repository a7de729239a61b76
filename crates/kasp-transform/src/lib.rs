//! Table transforms for genotyping plate exports.
//!
//! Each step of the results wizard maps to one module:
//!
//! - **calls**: derive `Resultado` from the raw `Call` code and add the
//!   placeholder columns
//! - **plates**: apply the `DaughterPlate` to `Placa`/`Teste` mapping
//! - **keys**: fill project fields, build the `Chave` key and prune
//!   instrument columns
//! - **pivot**: reshape to one row per sample and one column per test

pub mod calls;
mod error;
pub mod keys;
pub mod pivot;
pub mod plates;

pub use calls::{CALL_SUBSTITUTIONS, normalize_call, normalize_calls};
pub use error::{Result, TransformError};
pub use keys::{apply_project_fields, build_key, prune_columns};
pub use pivot::{PivotOutcome, pivot_results};
pub use plates::{apply_plate_mapping, distinct_plates};
