//! Directed landmark-pair records from the map file.

use camino::Utf8Path;

use crate::fs::read_text;
use crate::parse::data_lines;
use crate::DataError;

/// One `from → to` leg with its base score and travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRecord {
    /// 1-based source line.
    pub line: usize,
    /// Departure landmark name.
    pub from: String,
    /// Arrival landmark name.
    pub to: String,
    /// Base attractiveness of the leg before interest and load apply.
    pub base: f64,
    /// Travel time of the leg.
    pub time: f64,
}

/// Parse map text read from `path`.
///
/// Names are not resolved here; see [`MatrixBuilder`](crate::MatrixBuilder).
///
/// # Errors
/// Returns a [`DataError`] for malformed lines and negative or non-finite
/// numbers.
pub fn parse_map(path: &Utf8Path, contents: &str) -> Result<Vec<MapRecord>, DataError> {
    data_lines(path, contents)
        .map(|line| -> Result<MapRecord, DataError> {
            let [from, to, base, time] = line.fields::<4>(path)?;
            Ok(MapRecord {
                line: line.number,
                from: line.name(path, from)?.to_owned(),
                to: line.name(path, to)?.to_owned(),
                base: line.weight(path, "base score", base)?,
                time: line.weight(path, "travel time", time)?,
            })
        })
        .collect()
}

/// Read the landmark map file.
///
/// # Errors
/// Returns [`DataError::Io`] when the file cannot be read, otherwise as
/// [`parse_map`].
pub fn read_map(path: &Utf8Path) -> Result<Vec<MapRecord>, DataError> {
    parse_map(path, &read_text(path)?)
}
