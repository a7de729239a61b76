//! Error types for the results wizard.

use thiserror::Error;

use kasp_ingest::IngestError;
use kasp_output::OutputError;
use kasp_transform::TransformError;

use crate::state::WizardStep;

/// Errors returned by [`WizardSession`](crate::WizardSession) operations.
///
/// Recoverable problems inside a step are reported as notices instead; an
/// error means the operation did not take effect.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The upload could not be loaded. The session has been reset.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A transform failed in a way the wizard cannot recover from.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The spreadsheet could not be produced.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// The operation belongs to another step.
    #[error("this action belongs to the '{expected}' step but the wizard is at '{actual}'")]
    UnexpectedStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    /// The step needs the uploaded table but none is loaded.
    #[error("no table has been loaded")]
    NoWorkingTable,

    /// There is no final table to encode.
    #[error("there is no final table to export")]
    NothingToExport,
}

/// Result type for wizard operations.
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_step_display() {
        let err = WizardError::UnexpectedStep {
            expected: WizardStep::Mapping,
            actual: WizardStep::Idle,
        };
        assert_eq!(
            err.to_string(),
            "this action belongs to the 'mapping' step but the wizard is at 'idle'"
        );
    }

    #[test]
    fn test_no_working_table_display() {
        assert_eq!(
            WizardError::NoWorkingTable.to_string(),
            "no table has been loaded"
        );
    }

    #[test]
    fn test_ingest_error_is_transparent() {
        let err: WizardError = IngestError::HeaderNotFound {
            marker: "Data".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("header line containing 'Data'"));
    }
}
