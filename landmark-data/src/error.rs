//! Error type for reading landmark data files.

use std::io;

use camino::Utf8PathBuf;
use landmark_core::{LandmarkSetError, MatrixError, ProblemError};
use thiserror::Error;

/// Errors produced while reading input files or assembling a problem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A line did not have the expected number of tab-separated fields.
    #[error("{path}:{line}: expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        /// File being read.
        path: Utf8PathBuf,
        /// 1-based line number.
        line: usize,
        /// Fields the format requires.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },
    /// A landmark name field was empty.
    #[error("{path}:{line}: landmark name is empty")]
    EmptyName {
        /// File being read.
        path: Utf8PathBuf,
        /// 1-based line number.
        line: usize,
    },
    /// A numeric field could not be parsed.
    #[error("{path}:{line}: {field} {value:?} is not a number")]
    InvalidNumber {
        /// File being read.
        path: Utf8PathBuf,
        /// 1-based line number.
        line: usize,
        /// Column name.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
    /// A numeric field parsed but lies outside its permitted range.
    #[error("{path}:{line}: {field} {value} is outside {range}")]
    OutOfRange {
        /// File being read.
        path: Utf8PathBuf,
        /// 1-based line number.
        line: usize,
        /// Column name.
        field: &'static str,
        /// Parsed value.
        value: f64,
        /// Human-readable permitted range.
        range: &'static str,
    },
    /// The same landmark appears twice in a weight file.
    #[error("{path}:{line}: landmark {name:?} already listed on line {first}")]
    DuplicateEntry {
        /// File being read.
        path: Utf8PathBuf,
        /// 1-based line of the repeat.
        line: usize,
        /// Repeated landmark name.
        name: String,
        /// 1-based line of the first occurrence.
        first: usize,
    },
    /// The interest file lists no landmarks.
    #[error("no landmarks are defined")]
    NoLandmarks,
    /// The requested landmark count cannot be selected.
    #[error("cannot select {requested} landmarks: between 1 and {available} are defined")]
    InvalidLimit {
        /// Requested count, origin included.
        requested: usize,
        /// Landmarks defined by the interest file.
        available: usize,
    },
    /// A selected landmark has no visitor load.
    #[error("no visitor load is recorded for landmark {name:?}")]
    MissingLoad {
        /// Landmark lacking a load entry.
        name: String,
    },
    /// A map record names a landmark the interest file does not define.
    #[error("map line {line}: unknown landmark {name:?}")]
    UnknownLandmark {
        /// 1-based line of the record.
        line: usize,
        /// Unrecognised name.
        name: String,
    },
    /// A map record links a landmark to itself.
    #[error("map line {line}: landmark {name:?} is linked to itself")]
    SelfPair {
        /// 1-based line of the record.
        line: usize,
        /// Landmark name.
        name: String,
    },
    /// Two map records describe the same ordered pair.
    #[error("map line {line}: pair {from:?} -> {to:?} already given on line {first}")]
    DuplicatePair {
        /// 1-based line of the repeat.
        line: usize,
        /// Departure landmark.
        from: String,
        /// Arrival landmark.
        to: String,
        /// 1-based line of the first record.
        first: usize,
    },
    /// No map record covers an ordered pair of selected landmarks.
    #[error("no map record from {from:?} to {to:?}")]
    MissingPair {
        /// Departure landmark.
        from: String,
        /// Arrival landmark.
        to: String,
    },
    /// The selected names do not form a valid landmark set.
    #[error(transparent)]
    Landmarks(#[from] LandmarkSetError),
    /// A derived matrix failed validation.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// The assembled matrices do not form a valid problem.
    #[error(transparent)]
    Problem(#[from] ProblemError),
}
