//! Genotype call normalization.
//!
//! The instrument reports calls as allele pairs (`X:X`, `Y:X`, `Y:Y`) or `?`
//! for a failed well. Results are reported as positive/negative pairs.

use std::borrow::Cow;

use polars::prelude::{Column, DataFrame};

use kasp_common::{column_values, has_column, string_column};
use kasp_model::columns::{CALL, PLACEHOLDER_COLUMNS, RESULTADO};

use crate::error::{Result, TransformError};

/// Exact-match substitutions from instrument call to result code.
pub const CALL_SUBSTITUTIONS: [(&str, &str); 4] = [
    ("X:X", "POS:POS"),
    ("Y:X", "NEG:POS"),
    ("Y:Y", "NEG:NEG"),
    ("?", "FAIL"),
];

/// Maps one call code to its result code. Unknown codes pass through.
///
/// # Examples
///
/// ```
/// use kasp_transform::normalize_call;
///
/// assert_eq!(normalize_call("X:X"), "POS:POS");
/// assert_eq!(normalize_call("?"), "FAIL");
/// assert_eq!(normalize_call("N:N"), "N:N");
/// ```
pub fn normalize_call(call: &str) -> Cow<'_, str> {
    Cow::Borrowed(substitution_for(call).unwrap_or(call))
}

fn substitution_for(call: &str) -> Option<&'static str> {
    CALL_SUBSTITUTIONS
        .iter()
        .find(|(raw, _)| *raw == call)
        .map(|(_, result)| *result)
}

/// Adds the `Resultado` column and the empty placeholder columns.
///
/// Fails before touching the frame when `Call` is absent. Returns the number
/// of calls that were substituted.
pub fn normalize_calls(df: &mut DataFrame) -> Result<usize> {
    if !has_column(df, CALL) {
        return Err(TransformError::missing(CALL));
    }

    let height = df.height();
    for name in PLACEHOLDER_COLUMNS {
        df.with_column(Column::new(name.into(), vec![""; height]))?;
    }

    let mut substituted = 0usize;
    let results: Vec<Option<String>> = column_values(df, CALL)?
        .into_iter()
        .map(|call| {
            call.map(|raw| match substitution_for(&raw) {
                Some(result) => {
                    substituted += 1;
                    result.to_string()
                }
                None => raw,
            })
        })
        .collect();
    df.with_column(string_column(RESULTADO, results))?;

    tracing::debug!(rows = height, substituted, "normalized call codes");
    Ok(substituted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasp_common::column_names;

    #[test]
    fn test_normalize_call_table() {
        assert_eq!(normalize_call("X:X"), "POS:POS");
        assert_eq!(normalize_call("Y:X"), "NEG:POS");
        assert_eq!(normalize_call("Y:Y"), "NEG:NEG");
        assert_eq!(normalize_call("?"), "FAIL");
    }

    #[test]
    fn test_normalize_call_exact_match_only() {
        assert_eq!(normalize_call("N:N"), "N:N");
        assert_eq!(normalize_call("x:x"), "x:x");
        assert_eq!(normalize_call(" X:X"), " X:X");
        assert_eq!(normalize_call("X:Y"), "X:Y");
        assert_eq!(normalize_call(""), "");
    }

    #[test]
    fn test_normalize_calls_adds_columns() {
        let mut df = DataFrame::new(vec![Column::new(
            "Call".into(),
            vec![Some("X:X"), Some("N:N"), None, Some("?")],
        )])
        .unwrap();

        let substituted = normalize_calls(&mut df).unwrap();

        assert_eq!(substituted, 2);
        assert_eq!(
            column_names(&df),
            vec!["Call", "Empresa", "Projeto", "Placa", "Teste", "Resultado"]
        );
        assert_eq!(
            column_values(&df, "Resultado").unwrap(),
            vec![
                Some("POS:POS".to_string()),
                Some("N:N".to_string()),
                None,
                Some("FAIL".to_string()),
            ]
        );
        assert_eq!(
            column_values(&df, "Teste").unwrap(),
            vec![Some(String::new()); 4]
        );
        // Call is left untouched.
        assert_eq!(column_values(&df, "Call").unwrap()[0], Some("X:X".to_string()));
    }

    #[test]
    fn test_normalize_calls_missing_call_column() {
        let mut df =
            DataFrame::new(vec![Column::new("MasterWell".into(), vec!["A01"])]).unwrap();
        let result = normalize_calls(&mut df);
        assert!(matches!(
            result,
            Err(TransformError::MissingColumn { ref column }) if column == "Call"
        ));
        assert_eq!(column_names(&df), vec!["MasterWell"]);
    }
}
