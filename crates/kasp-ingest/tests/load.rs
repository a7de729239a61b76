//! Integration tests for loading instrument exports.

use kasp_common::{column_names, column_values};
use kasp_ingest::{IngestError, load_table, locate_header};
use kasp_model::IngestOptions;
use proptest::prelude::*;

const EXPORT: &str = "\
Project,Demo run
Plate count,2
Data
Call,DaughterPlate,MasterWell,SubjectID
X:X,1003_001_004_BT2,A01,S1
Y:Y,1003_001_004_BT2,A02,S2
?,1003_001_005_BT3,A01,
";

#[test]
fn loads_table_after_marker_line() {
    let df = load_table(EXPORT.as_bytes(), &IngestOptions::default()).expect("load export");
    assert_eq!(
        column_names(&df),
        vec!["Call", "DaughterPlate", "MasterWell", "SubjectID"]
    );
    assert_eq!(df.height(), 3);
    assert_eq!(
        column_values(&df, "SubjectID").unwrap(),
        vec![Some("S1".to_string()), Some("S2".to_string()), None]
    );
}

#[test]
fn loads_crlf_export_with_bom() {
    let export = format!("\u{feff}{}", EXPORT.replace('\n', "\r\n"));
    let df = load_table(export.as_bytes(), &IngestOptions::default()).expect("load export");
    assert_eq!(df.height(), 3);
    assert_eq!(
        column_values(&df, "SubjectID").unwrap()[0],
        Some("S1".to_string())
    );
}

#[test]
fn custom_marker_is_honored() {
    let export = "Run Data\n[Results]\nCall,MasterWell\nX:X,A01\n";
    let options = IngestOptions {
        header_marker: "[Results]".to_string(),
        ..IngestOptions::default()
    };
    let df = load_table(export.as_bytes(), &options).expect("load export");
    assert_eq!(column_names(&df), vec!["Call", "MasterWell"]);
}

#[test]
fn ragged_rows_surface_parse_error() {
    let export = "Data\nCall,MasterWell\nX:X,A01,extra,fields\n";
    let result = load_table(export.as_bytes(), &IngestOptions::default());
    assert!(matches!(result, Err(IngestError::Parse { .. })));
}

#[test]
fn trailing_blank_lines_add_no_rows() {
    let export = format!("{EXPORT}\n\n");
    let df = load_table(export.as_bytes(), &IngestOptions::default()).expect("load export");
    assert_eq!(df.height(), 3);

    let crlf = format!("{}\r\n\r\n", EXPORT.replace('\n', "\r\n"));
    let df = load_table(crlf.as_bytes(), &IngestOptions::default()).expect("load export");
    assert_eq!(df.height(), 3);
    assert_eq!(
        column_values(&df, "DaughterPlate").unwrap(),
        vec![
            Some("1003_001_004_BT2".to_string()),
            Some("1003_001_004_BT2".to_string()),
            Some("1003_001_005_BT3".to_string()),
        ]
    );
}

#[test]
fn blank_lines_inside_the_table_are_skipped() {
    let export = "Data\nCall,DaughterPlate,MasterWell\n\nX:X,P1,A01\n \t \nY:Y,P1,A02\n";
    let df = load_table(export.as_bytes(), &IngestOptions::default()).expect("load export");
    assert_eq!(column_names(&df), vec!["Call", "DaughterPlate", "MasterWell"]);
    assert_eq!(
        column_values(&df, "MasterWell").unwrap(),
        vec![Some("A01".to_string()), Some("A02".to_string())]
    );
}

proptest! {
    #[test]
    fn blank_line_padding_never_changes_row_count(trailing in 0usize..6, crlf in any::<bool>()) {
        let newline = if crlf { "\r\n" } else { "\n" };
        let export = format!("{}{}", EXPORT.replace('\n', newline), newline.repeat(trailing));
        let df = load_table(export.as_bytes(), &IngestOptions::default()).expect("load export");
        prop_assert_eq!(df.height(), 3);
    }

    #[test]
    fn exports_without_marker_are_rejected(lines in prop::collection::vec("[a-z0-9,;: ]{0,24}", 0..12)) {
        let text = lines.join("\n");
        let result = load_table(text.as_bytes(), &IngestOptions::default());
        let is_header_error = matches!(result, Err(IngestError::HeaderNotFound { .. }));
        prop_assert!(is_header_error);
    }

    #[test]
    fn marker_offset_is_line_after_first_match(
        before in prop::collection::vec("[a-z0-9,]{0,16}", 0..8),
        after in prop::collection::vec("[A-Za-z0-9,]{0,16}", 0..8),
    ) {
        let mut lines = before.clone();
        lines.push("Data".to_string());
        lines.extend(after);
        let text = lines.join("\n");
        let location = locate_header(&text, "Data").expect("marker present");
        prop_assert_eq!(location.marker_line, before.len());
        prop_assert_eq!(location.skip_lines, before.len() + 1);
    }
}
