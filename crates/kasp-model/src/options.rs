//! Configuration options for the wizard.

use serde::{Deserialize, Serialize};

use crate::columns::DEFAULT_PRUNED_COLUMNS;

/// Options for locating and parsing the instrument export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Substring that marks the line right before the column header row.
    /// Matched case-sensitively.
    pub header_marker: String,
    /// Field delimiter of the tabular section.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_marker: "Data".to_string(),
            delimiter: b',',
        }
    }
}

/// Options for the generated spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Name of the single worksheet.
    pub sheet_name: String,
    /// Leading component of the download file name.
    pub file_prefix: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Resultados".to_string(),
            file_prefix: "Resultados".to_string(),
        }
    }
}

/// Options controlling a wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardOptions {
    pub ingest: IngestOptions,
    /// Columns dropped before pivoting when present.
    pub pruned_columns: Vec<String>,
    pub output: OutputOptions,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            ingest: IngestOptions::default(),
            pruned_columns: DEFAULT_PRUNED_COLUMNS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            output: OutputOptions::default(),
        }
    }
}

impl WizardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header_marker(mut self, marker: impl Into<String>) -> Self {
        self.ingest.header_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.ingest.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_pruned_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pruned_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.output.sheet_name = name.into();
        self
    }
}
