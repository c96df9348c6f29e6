//! Error types emitted by the landmark tour CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use landmark_core::{ReportError, SolveError};
use landmark_data::DataError;
use thiserror::Error;

/// Errors emitted by the landmark tour CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A numeric option lies outside its accepted range.
    #[error("--{field} must be between {min} and {max}, got {value}")]
    ArgumentOutOfRange {
        /// Option or input the value belongs to.
        field: &'static str,
        /// Value supplied.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option or input the value belongs to.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option or input the value belongs to.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option or input the value belongs to.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
        #[source]
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The input files could not be read or combined.
    #[error("failed to load landmark data: {0}")]
    Data(#[from] DataError),
    /// The solver rejected the problem.
    #[error("failed to plan tour: {source}")]
    Solve {
        #[source]
        /// Underlying solver error.
        source: SolveError,
    },
    /// The solved tour could not be described.
    #[error("failed to build tour report: {0}")]
    Report(#[from] ReportError),
    /// Serialising the JSON report failed.
    #[error("failed to serialise tour report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write tour report: {0}")]
    WriteOutput(#[source] std::io::Error),
}
