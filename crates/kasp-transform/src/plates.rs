//! Daughter plate mapping.
//!
//! Every row of a daughter plate receives the same `Placa`/`Teste` pair. The
//! mapping is applied as a full overwrite, so resubmitting a corrected form
//! recomputes both columns from scratch.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use kasp_common::{column_values, has_column, string_column};
use kasp_model::PlateTestMapping;
use kasp_model::columns::{DAUGHTER_PLATE, PLACA, TESTE};

use crate::error::{Result, TransformError};

/// Distinct non-null `DaughterPlate` values in first-seen order.
pub fn distinct_plates(df: &DataFrame) -> Result<Vec<String>> {
    if !has_column(df, DAUGHTER_PLATE) {
        return Err(TransformError::missing(DAUGHTER_PLATE));
    }
    let mut seen = HashSet::new();
    let plates = column_values(df, DAUGHTER_PLATE)?
        .into_iter()
        .flatten()
        .filter(|plate| seen.insert(plate.clone()))
        .collect();
    Ok(plates)
}

/// Sets `Placa` and `Teste` on every row from its `DaughterPlate` entry.
///
/// Every observed plate must have an entry. Rows with a null plate get empty
/// strings. Returns the number of rows written.
pub fn apply_plate_mapping(df: &mut DataFrame, mapping: &PlateTestMapping) -> Result<usize> {
    let plates = distinct_plates(df)?;
    if let Some(plate) = mapping.first_missing(plates.iter().map(String::as_str)) {
        return Err(TransformError::UnmappedPlate {
            plate: plate.to_string(),
        });
    }

    let rows = column_values(df, DAUGHTER_PLATE)?;
    let mut placa = Vec::with_capacity(rows.len());
    let mut teste = Vec::with_capacity(rows.len());
    for plate in &rows {
        let pair = plate.as_deref().and_then(|plate| mapping.get(plate));
        placa.push(Some(pair.map(|p| p.placa.clone()).unwrap_or_default()));
        teste.push(Some(pair.map(|p| p.teste.clone()).unwrap_or_default()));
    }

    df.with_column(string_column(PLACA, placa))?;
    df.with_column(string_column(TESTE, teste))?;

    tracing::debug!(
        plates = plates.len(),
        rows = rows.len(),
        "applied daughter plate mapping"
    );
    Ok(rows.len())
}
