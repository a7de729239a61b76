//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library crates only emit `tracing` events. Hosts that want them on a
//! terminal or in a file call [`init_logging`] once at startup.
//!
//! # Log Levels
//!
//! - `error`: uploads that could not be processed, failed mappings
//! - `warn`: degraded outcomes such as a skipped pivot
//! - `info`: step transitions and row counts
//! - `debug`: per-step details
//!
//! File names, sample and plate identifiers go through [`redact_value`] and
//! are only written when [`LogConfig::log_data`] is enabled.
//!
//! # Usage
//!
//! ```ignore
//! use kasp_wizard::logging::{LogConfig, LogFormat, init_logging};
//! use tracing::Level;
//!
//! let config = LogConfig::default()
//!     .with_level(Level::DEBUG)
//!     .with_format(LogFormat::Json)
//!     .with_log_file("wizard.log");
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Placeholder written instead of row-level values.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Set once by [`init_logging_with_writer`].
static LOG_DATA: AtomicBool = AtomicBool::new(false);

const WORKSPACE_TARGETS: [&str; 6] = [
    "kasp_common",
    "kasp_ingest",
    "kasp_model",
    "kasp_output",
    "kasp_transform",
    "kasp_wizard",
];

/// Returns `value` when row-level logging is enabled, otherwise [`REDACTED_VALUE`].
pub fn redact_value(value: &str) -> &str {
    if LOG_DATA.load(Ordering::Relaxed) {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable.
    #[default]
    Pretty,
    /// Single line per event.
    Compact,
    /// One JSON object per event.
    Json,
}

/// Configuration for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for the workspace crates. Other crates log at `warn`.
    pub level: Level,
    pub format: LogFormat,
    pub timestamps: bool,
    /// Include the module path of each event.
    pub show_target: bool,
    /// Colored output. Ignored by [`LogFormat::Json`].
    pub ansi: bool,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
    /// Whether file names, sample and plate identifiers may be logged.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::default(),
            timestamps: false,
            show_target: false,
            ansi: true,
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Writes to `path` in append mode. Files never carry ANSI colors.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self.ansi = false;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Installs the global subscriber, writing to stderr or [`LogConfig::log_file`].
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, Mutex::new(file))
        }
        None => init_logging_with_writer(config, io::stderr),
    }
}

/// Installs the global subscriber with a custom writer.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer(config, writer))
        .with(EnvFilter::new(filter_directives(config.level)))
        .try_init()
        .map_err(io::Error::other)?;
    LOG_DATA.store(config.log_data, Ordering::Relaxed);
    Ok(())
}

fn fmt_layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.show_target)
        .with_ansi(config.ansi && config.format != LogFormat::Json);
    match (config.format, config.timestamps) {
        (LogFormat::Json, _) => layer.json().boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.pretty().boxed(),
        (LogFormat::Pretty, false) => layer.pretty().without_time().boxed(),
    }
}

/// Filter directives: `warn` globally, `level` for the workspace crates.
fn filter_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}
