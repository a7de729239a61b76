//! Long to wide reshape of the result table.
//!
//! The long table holds one row per (sample, test) reading. The wide table
//! holds one row per distinct combination of every other column, with one
//! column per `Teste` value carrying the `Resultado`.
//!
//! A pivot never aborts the wizard: when the table cannot be reshaped the
//! input passes through untouched and the caller reports why.

use std::collections::HashMap;

use polars::prelude::{Column, DataFrame};

use kasp_common::{column_names, column_values, has_column, string_column};
use kasp_model::columns::{RESULTADO, TESTE};

use crate::error::{Result, TransformError};

/// Result of [`pivot_results`].
#[derive(Debug)]
pub enum PivotOutcome {
    /// The reshaped table.
    Pivoted(DataFrame),
    /// Every column is `Teste` or `Resultado`; the input passes through.
    NoIndexColumns(DataFrame),
    /// The reshape failed; the input passes through.
    Failed {
        table: DataFrame,
        error: TransformError,
    },
}

impl PivotOutcome {
    /// The table to hand to the encoder, pivoted or not.
    pub fn table(&self) -> &DataFrame {
        match self {
            Self::Pivoted(table) | Self::NoIndexColumns(table) | Self::Failed { table, .. } => {
                table
            }
        }
    }

    pub fn into_table(self) -> DataFrame {
        match self {
            Self::Pivoted(table) | Self::NoIndexColumns(table) | Self::Failed { table, .. } => {
                table
            }
        }
    }

    pub fn is_pivoted(&self) -> bool {
        matches!(self, Self::Pivoted(_))
    }
}

/// Pivots `Resultado` into one column per `Teste` value.
///
/// Index columns are all other columns in table order; groups and test
/// columns both appear in first-seen order. When a group has several rows for
/// the same test, the first non-null `Resultado` in input order wins. A null
/// or empty `Teste` produces no column.
pub fn pivot_results(df: DataFrame) -> PivotOutcome {
    let index_columns: Vec<String> = column_names(&df)
        .into_iter()
        .filter(|name| name != TESTE && name != RESULTADO)
        .collect();
    if index_columns.is_empty() {
        tracing::warn!("no index columns available; skipping pivot");
        return PivotOutcome::NoIndexColumns(df);
    }

    match reshape(&df, &index_columns) {
        Ok(pivoted) => {
            tracing::info!(
                rows_in = df.height(),
                rows_out = pivoted.height(),
                columns = pivoted.width(),
                "pivoted results"
            );
            PivotOutcome::Pivoted(pivoted)
        }
        Err(error) => {
            tracing::warn!(%error, "pivot failed; keeping table in long format");
            PivotOutcome::Failed { table: df, error }
        }
    }
}

fn reshape(df: &DataFrame, index_columns: &[String]) -> Result<DataFrame> {
    for required in [TESTE, RESULTADO] {
        if !has_column(df, required) {
            return Err(TransformError::Pivot {
                message: format!("column '{required}' was not found"),
            });
        }
    }

    let index_values = index_columns
        .iter()
        .map(|name| column_values(df, name))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let tests = column_values(df, TESTE)?;
    let results = column_values(df, RESULTADO)?;

    // Group rows by their full index tuple.
    let mut group_by_key: HashMap<Vec<Option<&str>>, usize> = HashMap::new();
    let mut group_first_row: Vec<usize> = Vec::new();
    let mut row_group: Vec<usize> = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let key: Vec<Option<&str>> = index_values
            .iter()
            .map(|values| values[row].as_deref())
            .collect();
        let next = group_first_row.len();
        let group = *group_by_key.entry(key).or_insert(next);
        if group == next {
            group_first_row.push(row);
        }
        row_group.push(group);
    }

    // One cell vector per distinct test, indexed by group.
    let mut test_position: HashMap<&str, usize> = HashMap::new();
    let mut test_names: Vec<&str> = Vec::new();
    let mut cells: Vec<Vec<Option<String>>> = Vec::new();
    for (row, test) in tests.iter().enumerate() {
        // Rows without a test name keep their group but add no cell.
        let Some(test) = test.as_deref().filter(|test| !test.is_empty()) else {
            continue;
        };
        let position = *test_position.entry(test).or_insert_with(|| {
            test_names.push(test);
            cells.push(vec![None; group_first_row.len()]);
            cells.len() - 1
        });
        let cell = &mut cells[position][row_group[row]];
        if cell.is_none() {
            cell.clone_from(&results[row]);
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(index_columns.len() + test_names.len());
    for (name, values) in index_columns.iter().zip(&index_values) {
        let group_values = group_first_row
            .iter()
            .map(|&row| values[row].clone())
            .collect();
        columns.push(string_column(name, group_values));
    }
    for (name, values) in test_names.iter().zip(cells) {
        columns.push(string_column(name, values));
    }

    DataFrame::new(columns).map_err(|err| TransformError::Pivot {
        message: err.to_string(),
    })
}
