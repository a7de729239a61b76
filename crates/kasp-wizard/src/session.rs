//! The wizard session.
//!
//! A session owns everything one user works on: the upload identity, the
//! current table and the collected project fields. Hosts keep one session per
//! user and call into it once per interaction.

use chrono::{Local, NaiveDateTime};
use polars::prelude::DataFrame;

use kasp_ingest::load_table;
use kasp_model::{Notice, NoticeLevel, PlateTestMapping, WizardOptions};
use kasp_output::{SpreadsheetEncoder, SpreadsheetExport, export_file_name, render_preview};
use kasp_transform::{
    PivotOutcome, TransformError, apply_plate_mapping, apply_project_fields, build_key,
    distinct_plates, normalize_calls, pivot_results, prune_columns,
};

use crate::error::{Result, WizardError};
use crate::logging::redact_value;
use crate::state::{FileIdentity, ProjectInfo, SessionTable, WizardStep};

/// Outcome of one wizard interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Step the session is at after the interaction.
    pub step: WizardStep,
    /// Messages for the user, in the order they were raised.
    pub notices: Vec<Notice>,
}

impl StepReport {
    fn new(step: WizardStep) -> Self {
        Self {
            step,
            notices: Vec::new(),
        }
    }

    fn push(&mut self, notice: Notice) {
        tracing::debug!(level = notice.level.label(), "notice raised");
        self.notices.push(notice);
    }

    /// Highest severity among the notices.
    pub fn max_level(&self) -> Option<NoticeLevel> {
        self.notices.iter().map(|notice| notice.level).max()
    }

    pub fn has_errors(&self) -> bool {
        self.max_level() == Some(NoticeLevel::Error)
    }
}

/// State of one user's pass through the wizard.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    options: WizardOptions,
    step: WizardStep,
    file: Option<FileIdentity>,
    table: Option<SessionTable>,
    plates: Vec<String>,
    project: Option<ProjectInfo>,
}

impl WizardSession {
    pub fn new(options: WizardOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn file_identity(&self) -> Option<&FileIdentity> {
        self.file.as_ref()
    }

    /// The long-format table while the wizard is collecting input.
    pub fn working_table(&self) -> Option<&DataFrame> {
        match &self.table {
            Some(SessionTable::Working(df)) => Some(df),
            _ => None,
        }
    }

    /// The table produced by the final info step.
    pub fn final_table(&self) -> Option<&DataFrame> {
        match &self.table {
            Some(SessionTable::Final(df)) => Some(df),
            _ => None,
        }
    }

    /// Whichever table the session currently holds.
    pub fn table(&self) -> Option<&DataFrame> {
        self.table.as_ref().map(SessionTable::frame)
    }

    /// Distinct daughter plates of the upload, in first-seen order.
    pub fn plates(&self) -> &[String] {
        &self.plates
    }

    pub fn project(&self) -> Option<&ProjectInfo> {
        self.project.as_ref()
    }

    /// Text preview of the current table, or `None` before an upload.
    pub fn preview(&self, max_rows: usize) -> Result<Option<String>> {
        self.table()
            .map(|df| render_preview(df, max_rows))
            .transpose()
            .map_err(WizardError::from)
    }

    /// Handles an upload.
    ///
    /// Re-uploading the file the session already holds changes nothing. Any
    /// other file resets the session and is processed from scratch. When the
    /// file cannot be loaded the session ends up empty and the error is
    /// returned.
    pub fn upload(&mut self, name: &str, bytes: &[u8]) -> Result<StepReport> {
        let identity = FileIdentity::new(name, bytes.len() as u64);
        if self.file.as_ref() == Some(&identity) {
            tracing::debug!(size = identity.size, "same upload received again; keeping state");
            return Ok(StepReport::new(self.step));
        }

        self.reset();
        tracing::info!(
            file = redact_value(&identity.name),
            size = identity.size,
            "processing upload"
        );
        self.file = Some(identity);

        match self.load(bytes) {
            Ok(report) => Ok(report),
            Err(error) => {
                tracing::error!(%error, "upload could not be processed; session reset");
                self.reset();
                Err(error)
            }
        }
    }

    fn load(&mut self, bytes: &[u8]) -> Result<StepReport> {
        let mut df = load_table(bytes, &self.options.ingest)?;
        let substituted = normalize_calls(&mut df)?;
        self.step = WizardStep::Loaded;
        tracing::info!(
            rows = df.height(),
            columns = df.width(),
            substituted,
            "export loaded"
        );

        let mut report = StepReport::new(WizardStep::Mapping);
        match distinct_plates(&df) {
            Ok(plates) => self.plates = plates,
            Err(error) => {
                tracing::warn!(%error, "daughter plates unavailable");
                report.push(Notice::error(error.to_string()));
            }
        }
        report.push(Notice::success(
            "File processed. Fill in the plate mapping below.",
        ));

        self.table = Some(SessionTable::Working(df));
        self.step = WizardStep::Mapping;
        Ok(report)
    }

    /// Applies the `Placa`/`Teste` mapping and moves on to the final info step.
    ///
    /// An incomplete mapping or a table without `DaughterPlate` keeps the
    /// session at the mapping step and is reported as a notice, so the user
    /// can correct the form and submit again.
    pub fn submit_mapping(&mut self, mapping: &PlateTestMapping) -> Result<StepReport> {
        self.expect_step(WizardStep::Mapping)?;
        let Some(SessionTable::Working(df)) = self.table.as_mut() else {
            return Err(WizardError::NoWorkingTable);
        };

        let mut report = StepReport::new(WizardStep::Mapping);
        match apply_plate_mapping(df, mapping) {
            Ok(rows) => {
                tracing::info!(rows, plates = mapping.len(), "plate mapping applied");
                report.push(Notice::success("Mapping applied."));
                self.step = WizardStep::FinalInfo;
                report.step = self.step;
            }
            Err(error) => {
                let notice = match &error {
                    TransformError::UnmappedPlate { plate } => {
                        tracing::warn!(plate = redact_value(plate), "mapping is incomplete");
                        Notice::warning(error.to_string())
                    }
                    _ => {
                        tracing::error!(%error, "plate mapping failed");
                        Notice::error(error.to_string())
                    }
                };
                report.push(notice);
            }
        }
        Ok(report)
    }

    /// Sets the project fields and produces the final table.
    ///
    /// Both fields are required; surrounding whitespace is ignored. A missing
    /// `MasterWell` column only skips the `Chave` key, and a failed pivot keeps
    /// the long table. In both cases the wizard still reaches the download
    /// step and the report explains what happened.
    pub fn submit_project(&mut self, empresa: &str, projeto: &str) -> Result<StepReport> {
        self.expect_step(WizardStep::FinalInfo)?;
        let mut report = StepReport::new(WizardStep::FinalInfo);

        let (empresa, projeto) = (empresa.trim(), projeto.trim());
        if empresa.is_empty() || projeto.is_empty() {
            report.push(Notice::warning(
                "Please fill in both the Empresa and Projeto fields.",
            ));
            return Ok(report);
        }

        let Some(mut df) = self.working_table().cloned() else {
            return Err(WizardError::NoWorkingTable);
        };
        apply_project_fields(&mut df, empresa, projeto)?;

        if let Err(error) = build_key(&mut df) {
            tracing::error!(%error, "Chave not built");
            report.push(Notice::error(format!(
                "{error}; the Chave column could not be created."
            )));
        }

        let dropped = prune_columns(&mut df, &self.options.pruned_columns)?;
        if !dropped.is_empty() {
            report.push(Notice::info(format!(
                "Old columns were removed before pivoting: {}.",
                dropped.join(", ")
            )));
        }

        let outcome = pivot_results(df);
        match &outcome {
            PivotOutcome::Pivoted(table) => report.push(Notice::success(format!(
                "Results pivoted into {} rows.",
                table.height()
            ))),
            PivotOutcome::NoIndexColumns(_) => report.push(Notice::warning(
                "No columns are left to group by; the data was not pivoted.",
            )),
            PivotOutcome::Failed { error, .. } => {
                report.push(Notice::warning(error.to_string()));
                report.push(Notice::info(
                    "The spreadsheet will keep the data in its original long format.",
                ));
            }
        }

        self.table = Some(SessionTable::Final(outcome.into_table()));
        self.project = Some(ProjectInfo {
            empresa: empresa.to_string(),
            projeto: projeto.to_string(),
        });
        self.step = WizardStep::Download;
        report.step = self.step;
        tracing::info!("final table ready for download");
        Ok(report)
    }

    /// Encodes the final table, stamping the file name with `timestamp`.
    pub fn export_at<E>(&self, encoder: &E, timestamp: NaiveDateTime) -> Result<SpreadsheetExport>
    where
        E: SpreadsheetEncoder + ?Sized,
    {
        self.expect_step(WizardStep::Download)?;
        let (Some(table), Some(project)) = (self.final_table(), self.project.as_ref()) else {
            return Err(WizardError::NothingToExport);
        };

        let bytes = encoder.encode(table)?;
        let file_name = export_file_name(
            &self.options.output.file_prefix,
            &project.empresa,
            &project.projeto,
            timestamp,
            encoder.extension(),
        );
        tracing::info!(bytes = bytes.len(), "spreadsheet generated");
        Ok(SpreadsheetExport::new(file_name, encoder.mime_type(), bytes))
    }

    /// Encodes the final table, stamping the file name with the local time.
    pub fn export<E>(&self, encoder: &E) -> Result<SpreadsheetExport>
    where
        E: SpreadsheetEncoder + ?Sized,
    {
        self.export_at(encoder, Local::now().naive_local())
    }

    /// Discards everything and returns to the upload step.
    pub fn restart(&mut self) -> StepReport {
        tracing::info!(from = %self.step, "wizard restarted");
        self.reset();
        StepReport::new(self.step)
    }

    fn reset(&mut self) {
        self.step = WizardStep::Idle;
        self.file = None;
        self.table = None;
        self.plates.clear();
        self.project = None;
    }

    fn expect_step(&self, expected: WizardStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::UnexpectedStep {
                expected,
                actual: self.step,
            })
        }
    }
}
