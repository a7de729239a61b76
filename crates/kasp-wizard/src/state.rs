//! Wizard state types.

use std::fmt;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Position of a session in the wizard.
///
/// Steps only move forward; the session returns to [`WizardStep::Idle`]
/// through a full reset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Waiting for an upload.
    #[default]
    Idle,
    /// The export was loaded and its calls normalized.
    Loaded,
    /// Waiting for the daughter plate mapping.
    Mapping,
    /// Waiting for `Empresa` and `Projeto`.
    FinalInfo,
    /// The final table is ready to encode.
    Download,
}

impl WizardStep {
    /// Returns the machine-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loaded => "loaded",
            Self::Mapping => "mapping",
            Self::FinalInfo => "final_info",
            Self::Download => "download",
        }
    }

    /// Returns the heading the host shows for this step.
    pub fn title(self) -> &'static str {
        match self {
            Self::Idle => "Step 1: Upload your CSV file",
            Self::Loaded | Self::Mapping => "Step 2: Plate and test mapping",
            Self::FinalInfo => "Step 3: Project information",
            Self::Download => "Step 4: Final review and download",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of an upload. A different identity restarts the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileIdentity {
    pub name: String,
    pub size: u64,
}

impl FileIdentity {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.size)
    }
}

/// `Empresa` and `Projeto` as accepted by the final info step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub empresa: String,
    pub projeto: String,
}

/// The table a session currently holds.
#[derive(Debug, Clone)]
pub enum SessionTable {
    /// Long format, still being edited.
    Working(DataFrame),
    /// Output of the last step. Never modified.
    Final(DataFrame),
}

impl SessionTable {
    pub fn frame(&self) -> &DataFrame {
        match self {
            Self::Working(df) | Self::Final(df) => df,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final(_))
    }
}
