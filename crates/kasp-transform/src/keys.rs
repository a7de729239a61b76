//! Project fields, the `Chave` key and column pruning.

use polars::prelude::{Column, DataFrame};

use kasp_common::{column_values, has_column, string_column};
use kasp_model::columns::{CHAVE, EMPRESA, MASTER_WELL, PLACA, PROJETO};

use crate::error::{Result, TransformError};

/// Writes the same `Empresa` and `Projeto` value on every row.
pub fn apply_project_fields(df: &mut DataFrame, empresa: &str, projeto: &str) -> Result<()> {
    let height = df.height();
    df.with_column(Column::new(EMPRESA.into(), vec![empresa; height]))?;
    df.with_column(Column::new(PROJETO.into(), vec![projeto; height]))?;
    Ok(())
}

/// Adds `Chave` as `Placa` + `-` + `MasterWell`.
///
/// Null parts render as empty text. The frame is left unchanged when either
/// source column is missing.
pub fn build_key(df: &mut DataFrame) -> Result<()> {
    for required in [MASTER_WELL, PLACA] {
        if !has_column(df, required) {
            return Err(TransformError::missing(required));
        }
    }

    let placas = column_values(df, PLACA)?;
    let wells = column_values(df, MASTER_WELL)?;
    let keys: Vec<Option<String>> = placas
        .iter()
        .zip(&wells)
        .map(|(placa, well)| {
            Some(format!(
                "{}-{}",
                placa.as_deref().unwrap_or_default(),
                well.as_deref().unwrap_or_default()
            ))
        })
        .collect();
    df.with_column(string_column(CHAVE, keys))?;
    Ok(())
}

/// Drops the listed columns that are present. Missing ones are ignored.
///
/// Returns the names that were actually dropped, in list order.
pub fn prune_columns<S: AsRef<str>>(df: &mut DataFrame, names: &[S]) -> Result<Vec<String>> {
    let mut dropped = Vec::new();
    for name in names {
        let name = name.as_ref();
        if has_column(df, name) {
            *df = df.drop(name)?;
            dropped.push(name.to_string());
        }
    }
    if !dropped.is_empty() {
        tracing::debug!(columns = ?dropped, "pruned instrument columns");
    }
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasp_common::column_names;

    fn keyed_df() -> DataFrame {
        DataFrame::new(vec![
            Column::new("MasterWell".into(), vec![Some("A01"), None]),
            Column::new("SubjectID".into(), vec!["S1", "S2"]),
            Column::new("Empresa".into(), vec!["", ""]),
            Column::new("Projeto".into(), vec!["", ""]),
            Column::new("Placa".into(), vec!["001-004", "001-004"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_apply_project_fields_sets_constants() {
        let mut df = keyed_df();
        apply_project_fields(&mut df, "Acme", "P1").unwrap();
        assert_eq!(
            column_values(&df, "Empresa").unwrap(),
            vec![Some("Acme".to_string()); 2]
        );
        assert_eq!(
            column_values(&df, "Projeto").unwrap(),
            vec![Some("P1".to_string()); 2]
        );
    }

    #[test]
    fn test_build_key_concatenates_placa_and_well() {
        let mut df = keyed_df();
        build_key(&mut df).unwrap();
        assert_eq!(
            column_values(&df, "Chave").unwrap(),
            vec![Some("001-004-A01".to_string()), Some("001-004-".to_string())]
        );
    }

    #[test]
    fn test_build_key_without_master_well_leaves_frame() {
        let mut df = keyed_df().drop("MasterWell").unwrap();
        let before = column_names(&df);
        let result = build_key(&mut df);
        assert!(matches!(
            result,
            Err(TransformError::MissingColumn { ref column }) if column == "MasterWell"
        ));
        assert_eq!(column_names(&df), before);
    }

    #[test]
    fn test_prune_columns_is_best_effort() {
        let mut df = keyed_df();
        let dropped = prune_columns(&mut df, &["SubjectID", "X", "Call"]).unwrap();
        assert_eq!(dropped, vec!["SubjectID"]);
        assert_eq!(
            column_names(&df),
            vec!["MasterWell", "Empresa", "Projeto", "Placa"]
        );

        let again = prune_columns(&mut df, &["SubjectID", "X", "Call"]).unwrap();
        assert!(again.is_empty());
        assert_eq!(df.width(), 4);
    }
}
