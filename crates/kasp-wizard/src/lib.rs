//! Results wizard for KASP genotyping plate exports.
//!
//! A [`WizardSession`] walks one uploaded export through four steps:
//!
//! 1. **upload**: locate the header, load the table and normalize calls
//! 2. **mapping**: assign `Placa`/`Teste` to every daughter plate
//! 3. **final info**: set `Empresa`/`Projeto`, build `Chave`, prune and pivot
//! 4. **download**: encode the final table as a spreadsheet
//!
//! Every interaction returns a [`StepReport`] with the notices the host should
//! show. Rendering those notices, the forms and the download button is left to
//! the host.
//!
//! # Example
//!
//! ```ignore
//! use kasp_model::{PlateTest, PlateTestMapping, WizardOptions};
//! use kasp_output::XlsxEncoder;
//! use kasp_wizard::WizardSession;
//!
//! let mut session = WizardSession::new(WizardOptions::default());
//! session.upload("plate.csv", &bytes)?;
//! let mapping = session
//!     .plates()
//!     .iter()
//!     .map(|plate| (plate.clone(), PlateTest::new("001-004", "BT2")))
//!     .collect();
//! session.submit_mapping(&mapping)?;
//! session.submit_project("Acme", "P1")?;
//! let export = session.export(&XlsxEncoder::default())?;
//! ```

mod error;
pub mod logging;
mod session;
mod state;

pub use error::{Result, WizardError};
pub use session::{StepReport, WizardSession};
pub use state::{FileIdentity, ProjectInfo, SessionTable, WizardStep};
