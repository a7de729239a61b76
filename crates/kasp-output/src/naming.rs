//! Download file naming.

use std::borrow::Cow;

use chrono::NaiveDateTime;

/// MIME type of an XLSX workbook.
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// `chrono` format of the timestamp component.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Builds `<prefix>_<empresa>_<projeto>_<YYYYMMDD_HHMMSS>.<extension>`.
///
/// Characters that cannot appear in a file name are replaced with `_`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kasp_output::export_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(14, 5, 7)
///     .unwrap();
/// assert_eq!(
///     export_file_name("Resultados", "Acme", "P1", at, "xlsx"),
///     "Resultados_Acme_P1_20240309_140507.xlsx"
/// );
/// ```
pub fn export_file_name(
    prefix: &str,
    empresa: &str,
    projeto: &str,
    timestamp: NaiveDateTime,
    extension: &str,
) -> String {
    format!(
        "{}_{}_{}_{}.{extension}",
        sanitize_component(prefix),
        sanitize_component(empresa),
        sanitize_component(projeto),
        timestamp.format(TIMESTAMP_FORMAT),
    )
}

fn sanitize_component(value: &str) -> Cow<'_, str> {
    let is_illegal =
        |c: char| c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|');
    if value.contains(is_illegal) {
        Cow::Owned(
            value
                .chars()
                .map(|c| if is_illegal(c) { '_' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}

/// Encoded spreadsheet ready to hand to the host for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetExport {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SpreadsheetExport {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
