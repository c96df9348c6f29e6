//! Per-landmark weights: personal interest and visitor load.

use std::collections::HashMap;

use camino::Utf8Path;

use crate::fs::read_text;
use crate::parse::data_lines;
use crate::DataError;

/// A named weight and the line it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightEntry {
    /// Landmark name.
    pub name: String,
    /// Parsed value.
    pub value: f64,
    /// 1-based source line.
    pub line: usize,
}

/// Weights in file order with a name index.
///
/// Names are unique; the first entry of an interest table is the origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
    index: HashMap<String, usize>,
}

impl WeightTable {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &WeightEntry> {
        self.entries.iter()
    }

    /// Value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entry(name).map(|entry| entry.value)
    }

    /// File-order position of `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn entry(&self, name: &str) -> Option<&WeightEntry> {
        self.position(name).and_then(|idx| self.entries.get(idx))
    }

    fn push(&mut self, path: &Utf8Path, entry: WeightEntry) -> Result<(), DataError> {
        if let Some(first) = self.entry(&entry.name) {
            return Err(DataError::DuplicateEntry {
                path: path.to_path_buf(),
                line: entry.line,
                name: entry.name,
                first: first.line,
            });
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum WeightKind {
    Interest,
    Load,
}

fn parse_weights(
    path: &Utf8Path,
    contents: &str,
    kind: WeightKind,
) -> Result<WeightTable, DataError> {
    let mut table = WeightTable::default();
    for line in data_lines(path, contents) {
        let [raw_name, raw] = line.fields::<2>(path)?;
        let name = line.name(path, raw_name)?;
        let value = match kind {
            WeightKind::Interest => line.weight(path, "interest", raw)?,
            WeightKind::Load => line.fraction(path, "load", raw)?,
        };
        table.push(
            path,
            WeightEntry {
                name: name.to_owned(),
                value,
                line: line.number,
            },
        )?;
    }
    Ok(table)
}

/// Parse personal interest text read from `path`.
///
/// # Errors
/// Returns a [`DataError`] for malformed lines, negative or non-finite
/// interest and repeated names.
pub fn parse_interest(path: &Utf8Path, contents: &str) -> Result<WeightTable, DataError> {
    parse_weights(path, contents, WeightKind::Interest)
}

/// Parse visitor load text read from `path`. Loads lie in `[0, 1]`.
///
/// # Errors
/// Returns a [`DataError`] for malformed lines, loads outside `[0, 1]` and
/// repeated names.
pub fn parse_load(path: &Utf8Path, contents: &str) -> Result<WeightTable, DataError> {
    parse_weights(path, contents, WeightKind::Load)
}

/// Read the personal interest file.
///
/// # Errors
/// Returns [`DataError::Io`] when the file cannot be read, otherwise as
/// [`parse_interest`].
pub fn read_interest(path: &Utf8Path) -> Result<WeightTable, DataError> {
    parse_interest(path, &read_text(path)?)
}

/// Read the visitor load file.
///
/// # Errors
/// Returns [`DataError::Io`] when the file cannot be read, otherwise as
/// [`parse_load`].
pub fn read_load(path: &Utf8Path) -> Result<WeightTable, DataError> {
    parse_load(path, &read_text(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn path() -> &'static Utf8Path {
        Utf8Path::new("personal_interest.txt")
    }

    #[rstest]
    fn interest_keeps_file_order() {
        let table = parse_interest(
            path(),
            "Landmark\tInterest\nHotel\t0\nMuseum\t0.9\nHarbour\t0.4\n",
        )
        .expect("interest table");
        let names: Vec<_> = table.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Hotel", "Museum", "Harbour"]);
        assert_eq!(table.position("Harbour"), Some(2));
        assert_eq!(table.get("Museum"), Some(0.9));
        assert_eq!(table.get("Castle"), None);
    }

    #[rstest]
    fn repeated_names_are_rejected() {
        let err = parse_load(path(), "Landmark\tLoad\nHotel\t0\nMuseum\t0.2\nHotel\t0.1\n")
            .expect_err("duplicate");
        assert!(matches!(
            err,
            DataError::DuplicateEntry { line: 4, first: 2, ref name, .. } if name == "Hotel"
        ));
    }

    #[rstest]
    fn loads_above_one_are_rejected() {
        let err = parse_load(path(), "Landmark\tLoad\nHotel\t1.2\n").expect_err("too heavy");
        assert!(matches!(err, DataError::OutOfRange { line: 2, field: "load", .. }));
    }

    #[rstest]
    fn interest_may_exceed_one() {
        let table = parse_interest(path(), "Landmark\tInterest\nHotel\t3.5\n").expect("interest");
        assert_eq!(table.get("Hotel"), Some(3.5));
    }

    #[rstest]
    fn header_only_file_is_empty() {
        let table = parse_interest(path(), "Landmark\tInterest\n").expect("interest");
        assert!(table.is_empty());
    }
}
