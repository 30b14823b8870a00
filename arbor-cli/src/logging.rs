//! Structured logging for the arbor CLI.
//!
//! Diagnostics are emitted to stderr via `tracing` so the report on stdout
//! stays parseable; the `log` facade is bridged so dependencies using either
//! API end up in the same stream. The log level comes from `RUST_LOG`.

use std::{env, io, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "ARBOR_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostic events, selected via `ARBOR_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Human,
    /// Newline-delimited JSON records.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: raw.trim().to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Unsupported log format requested via `ARBOR_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Installs the global subscriber once; later calls are no-ops.
///
/// # Errors
/// Returns [`LoggingError::UnsupportedFormat`] when `ARBOR_LOG_FORMAT` names
/// a format other than `human` or `json`.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let format = format_from_env()?;
    // A subscriber installed elsewhere (tests, embedding callers) keeps
    // precedence; a failed try_init is not a reason to abort the command.
    let _ = install_subscriber(format);
    let _ = INSTALLED.set(());
    Ok(())
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    env::var(LOG_FORMAT_ENV)
        .ok()
        .map_or(Ok(LogFormat::default()), |raw| raw.parse())
}

fn install_subscriber(
    format: LogFormat,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let events = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(io::stderr);
    let events = match format {
        LogFormat::Human => events.boxed(),
        LogFormat::Json => events.json().with_current_span(true).boxed(),
    };

    // Best-effort bridge; an already-claimed `log` slot is left alone.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
}
