//! CSV reading from the located header onward.

use std::io::Cursor;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use kasp_model::IngestOptions;

use crate::error::{IngestError, Result};

use super::header::{decode_export, line_offset, locate_header};

/// Decodes an upload, locates the header and reads the table.
pub fn load_table(bytes: &[u8], options: &IngestOptions) -> Result<DataFrame> {
    let text = decode_export(bytes);
    let location = locate_header(&text, &options.header_marker)?;
    tracing::debug!(
        marker_line = location.marker_line,
        skip_lines = location.skip_lines,
        "located header marker"
    );
    read_table(&text, location.skip_lines, options.delimiter)
}

/// Reads delimited text, skipping `skip_lines` raw lines first.
///
/// The first remaining line is the column header row. All columns are read
/// as strings so identifiers keep their textual form; empty fields are null.
/// Blank and whitespace-only lines are skipped.
pub fn read_table(text: &str, skip_lines: usize, delimiter: u8) -> Result<DataFrame> {
    let body = non_blank_lines(&text[line_offset(text, skip_lines)..]);
    if body.is_empty() {
        return Err(IngestError::Parse {
            message: "no tabular data after the header marker".to_string(),
        });
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| parse.with_separator(delimiter))
        .into_reader_with_file_handle(Cursor::new(body.into_bytes()))
        .finish()?;

    trim_header_names(&mut df)?;

    tracing::info!(
        rows = df.height(),
        columns = df.width(),
        "loaded export table"
    );
    Ok(df)
}

/// Joins the lines of `body` that hold more than whitespace, one per line.
fn non_blank_lines(body: &str) -> String {
    let mut kept = String::with_capacity(body.len());
    for line in body.lines().filter(|line| !line.trim().is_empty()) {
        kept.push_str(line);
        kept.push('\n');
    }
    kept
}

/// Trims surrounding whitespace from column names.
fn trim_header_names(df: &mut DataFrame) -> Result<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .iter()
        .filter_map(|name| {
            let trimmed = name.trim();
            (trimmed != name.as_str()).then(|| (name.to_string(), trimmed.to_string()))
        })
        .collect();
    for (from, to) in renames {
        df.rename(&from, to.into())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasp_common::{column_names, column_values};

    #[test]
    fn test_read_table_skips_preamble() {
        let text = "junk\nData\nCall,Well\nX:X,A01\nY:Y,A02\n";
        let df = read_table(text, 2, b',').unwrap();
        assert_eq!(column_names(&df), vec!["Call", "Well"]);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_read_table_keeps_text_columns() {
        let text = "Data\nWell,X\n001,0.50\n";
        let df = read_table(text, 1, b',').unwrap();
        assert_eq!(column_values(&df, "Well").unwrap(), vec![Some("001".to_string())]);
        assert_eq!(column_values(&df, "X").unwrap(), vec![Some("0.50".to_string())]);
    }

    #[test]
    fn test_read_table_trims_header_names() {
        let text = "Data\n Call , Well\nX:X,A01\n";
        let df = read_table(text, 1, b',').unwrap();
        assert_eq!(column_names(&df), vec!["Call", "Well"]);
    }

    #[test]
    fn test_read_table_custom_delimiter() {
        let text = "Data\nCall;Well\nX:X;A01\n";
        let df = read_table(text, 1, b';').unwrap();
        assert_eq!(column_names(&df), vec!["Call", "Well"]);
    }

    #[test]
    fn test_read_table_nothing_after_marker() {
        let result = read_table("preamble\nData\n", 2, b',');
        assert!(matches!(result, Err(IngestError::Parse { .. })));
    }

    #[test]
    fn test_read_table_skips_blank_lines() {
        let text = "Data\nCall,Well\n\nX:X,A01\n   \nY:Y,A02\n\n\n";
        let df = read_table(text, 1, b',').unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(
            column_values(&df, "Well").unwrap(),
            vec![Some("A01".to_string()), Some("A02".to_string())]
        );
    }

    #[test]
    fn test_read_table_blank_body_is_parse_error() {
        let result = read_table("Data\n\r\n  \n", 1, b',');
        assert!(matches!(result, Err(IngestError::Parse { .. })));
    }

    #[test]
    fn test_read_table_header_only() {
        let df = read_table("Data\nCall,Well\n", 1, b',').unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(column_names(&df), vec!["Call", "Well"]);
    }

    #[test]
    fn test_load_table_missing_marker() {
        let result = load_table(b"Call,Well\nX:X,A01\n", &IngestOptions::default());
        assert!(matches!(result, Err(IngestError::HeaderNotFound { .. })));
    }
}
