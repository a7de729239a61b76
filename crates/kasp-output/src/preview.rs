//! Plain-text table previews.
//!
//! The host shows the current table after every wizard step. Previews are
//! rendered without colors so they read the same in a terminal, a log line or
//! a `<pre>` block.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use polars::prelude::DataFrame;

use kasp_common::{column_names, column_values};

use crate::error::Result;

/// Renders at most `max_rows` rows of `df` as a text table.
///
/// Null cells render empty. When rows are left out, a final line reports how
/// many.
pub fn render_preview(df: &DataFrame, max_rows: usize) -> Result<String> {
    let names = column_names(df);
    let shown = df.height().min(max_rows);
    let head = df.head(Some(shown));

    let columns = names
        .iter()
        .map(|name| column_values(&head, name))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled)
        .force_no_tty();
    table.set_header(names.iter().map(|name| header_cell(name)));
    for row in 0..shown {
        table.add_row(
            columns
                .iter()
                .map(|values| Cell::new(values[row].as_deref().unwrap_or_default())),
        );
    }

    let mut rendered = table.to_string();
    let hidden = df.height() - shown;
    if hidden > 0 {
        rendered.push('\n');
        rendered.push_str(&format!("… {hidden} more rows"));
    }
    Ok(rendered)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).set_alignment(CellAlignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn final_df() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Chave".into(), vec!["001-004-A01", "001-004-A02", "001-004-A03"]),
            Column::new("BT2".into(), vec![Some("POS:POS"), None, Some("FAIL")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_preview_lists_headers_and_rows() {
        let preview = render_preview(&final_df(), 10).unwrap();
        assert!(preview.contains("Chave"));
        assert!(preview.contains("BT2"));
        assert!(preview.contains("001-004-A03"));
        assert!(preview.contains("FAIL"));
        assert!(!preview.contains("more rows"));
    }

    #[test]
    fn test_preview_truncates_rows() {
        let preview = render_preview(&final_df(), 1).unwrap();
        assert!(preview.contains("001-004-A01"));
        assert!(!preview.contains("001-004-A02"));
        assert!(preview.ends_with("… 2 more rows"));
    }

    #[test]
    fn test_preview_has_no_ansi_codes() {
        let preview = render_preview(&final_df(), 10).unwrap();
        assert!(!preview.contains('\u{1b}'));
    }
}
