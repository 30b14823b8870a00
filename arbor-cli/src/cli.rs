//! Command-line interface for the arbor MST runner.
//!
//! Offers a `run` command that decodes a JSON graph document, computes both
//! MSTs for every graph, and emits the report document to a file or stdout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use arbor_core::{Graph, MstError, run_graphs};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::wire::{self, ReportDoc};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Compute minimum spanning trees and report their cost.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute MSTs for every graph in a JSON input document.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the JSON document holding the `graphs` array.
    pub input: PathBuf,

    /// Write the report to this path instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input document could not be decoded.
    #[error("failed to decode `{path}`: {source}")]
    Decode {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// The report could not be encoded.
    #[error("failed to encode report: {source}")]
    Encode {
        /// Underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },
    /// MST computation failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug)]
pub struct ExecutionSummary {
    /// Number of graphs processed.
    pub graphs: usize,
    /// The report document, retained when no output path was given.
    pub report: Option<ReportDoc>,
    /// Destination file, when `--output` was used.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, computation, or encoding fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
    }
}

fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let graphs = load_graphs(&command.input)?;
    let reports = run_graphs(&graphs)?;
    let doc = wire::report_doc(&reports);

    if let Some(path) = command.output {
        write_report(&doc, &path)?;
        Ok(ExecutionSummary {
            graphs: reports.len(),
            report: None,
            output: Some(path),
        })
    } else {
        Ok(ExecutionSummary {
            graphs: reports.len(),
            report: Some(doc),
            output: None,
        })
    }
}

fn load_graphs(path: &Path) -> Result<Vec<Graph>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    wire::decode_graphs(BufReader::new(file)).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(doc: &ReportDoc, path: &Path) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    wire::encode_report(doc, &mut writer).map_err(|source| CliError::Encode { source })?;
    writer.flush().map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer`: the report JSON when it was not written to
/// a file, otherwise a one-line confirmation.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match (&summary.report, &summary.output) {
        (Some(report), _) => wire::encode_report(report, writer).map_err(io::Error::other),
        (None, Some(path)) => writeln!(
            writer,
            "results written to {} ({} graphs)",
            path.display(),
            summary.graphs
        ),
        (None, None) => Ok(()),
    }
}
