//! Export decoding and header location.

use std::borrow::Cow;

use encoding_rs::UTF_8;

use crate::error::{IngestError, Result};

/// Where the tabular section of an export starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocation {
    /// Zero-based index of the line containing the marker.
    pub marker_line: usize,
    /// Number of lines to skip before the column header row.
    pub skip_lines: usize,
}

/// Decodes raw upload bytes as UTF-8.
///
/// A leading BOM is dropped and malformed sequences become U+FFFD instead of
/// failing the upload.
pub fn decode_export(bytes: &[u8]) -> Cow<'_, str> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::debug!("export contained invalid UTF-8; replaced malformed bytes");
    }
    text
}

/// Finds the first line containing `marker`.
///
/// The column header row is the line right after it.
pub fn locate_header(text: &str, marker: &str) -> Result<HeaderLocation> {
    text.lines()
        .position(|line| line.contains(marker))
        .map(|marker_line| HeaderLocation {
            marker_line,
            skip_lines: marker_line + 1,
        })
        .ok_or_else(|| IngestError::HeaderNotFound {
            marker: marker.to_string(),
        })
}

/// Byte offset at which line `index` starts, or the text length when the
/// text has fewer lines.
pub(crate) fn line_offset(text: &str, index: usize) -> usize {
    text.split_inclusive('\n')
        .take(index)
        .map(str::len)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_header_first_match_wins() {
        let text = "junk\nRun Data\nCall,Well\nData again\n";
        let location = locate_header(text, "Data").unwrap();
        assert_eq!(location.marker_line, 1);
        assert_eq!(location.skip_lines, 2);
    }

    #[test]
    fn test_locate_header_is_case_sensitive() {
        let result = locate_header("data\nDATA\n", "Data");
        assert!(matches!(result, Err(IngestError::HeaderNotFound { .. })));
    }

    #[test]
    fn test_locate_header_substring_match() {
        let location = locate_header("[PlateData]\nCall\n", "Data").unwrap();
        assert_eq!(location.marker_line, 0);
    }

    #[test]
    fn test_locate_header_empty_text() {
        assert!(locate_header("", "Data").is_err());
    }

    #[test]
    fn test_decode_export_strips_bom() {
        let bytes = b"\xEF\xBB\xBFData\nCall\n";
        assert_eq!(decode_export(bytes), "Data\nCall\n");
    }

    #[test]
    fn test_decode_export_replaces_invalid_bytes() {
        let bytes = b"Pr\xFFoject\nData\n";
        let text = decode_export(bytes);
        assert_eq!(text, "Pr\u{FFFD}oject\nData\n");
        assert_eq!(locate_header(&text, "Data").unwrap().skip_lines, 2);
    }

    #[test]
    fn test_line_offset_handles_crlf() {
        let text = "a\r\nbb\r\nccc";
        assert_eq!(line_offset(text, 0), 0);
        assert_eq!(line_offset(text, 1), 3);
        assert_eq!(line_offset(text, 2), 7);
        assert_eq!(line_offset(text, 5), text.len());
    }
}
