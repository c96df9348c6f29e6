//! Tab-separated line reader shared by every input format.
//!
//! The first line of each file is a header and is skipped. Blank lines are
//! ignored and fields are trimmed.

use camino::Utf8Path;

use crate::DataError;

/// One non-blank data line split on tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TsvLine<'a> {
    /// 1-based line number in the file.
    pub(crate) number: usize,
    fields: Vec<&'a str>,
}

/// Data lines of `contents`, header excluded.
pub(crate) fn data_lines<'a>(
    path: &'a Utf8Path,
    contents: &'a str,
) -> impl Iterator<Item = TsvLine<'a>> + 'a {
    contents
        .lines()
        .enumerate()
        .skip(1)
        .filter_map(move |(idx, line)| {
            let number = idx + 1;
            if line.trim().is_empty() {
                log::debug!("{path}:{number}: skipping blank line");
                return None;
            }
            Some(TsvLine {
                number,
                fields: line.trim_end().split('\t').map(str::trim).collect(),
            })
        })
}

impl<'a> TsvLine<'a> {
    /// Fields of the line, checked to number exactly `N`.
    pub(crate) fn fields<const N: usize>(&self, path: &Utf8Path) -> Result<[&'a str; N], DataError> {
        <[&str; N]>::try_from(self.fields.as_slice()).map_err(|_| DataError::FieldCount {
            path: path.to_path_buf(),
            line: self.number,
            expected: N,
            found: self.fields.len(),
        })
    }

    /// A landmark name field, rejected when empty.
    pub(crate) fn name(&self, path: &Utf8Path, raw: &'a str) -> Result<&'a str, DataError> {
        if raw.is_empty() {
            return Err(DataError::EmptyName {
                path: path.to_path_buf(),
                line: self.number,
            });
        }
        Ok(raw)
    }

    /// A finite, non-negative number.
    pub(crate) fn weight(
        &self,
        path: &Utf8Path,
        field: &'static str,
        raw: &str,
    ) -> Result<f64, DataError> {
        let value = self.number_field(path, field, raw)?;
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(self.out_of_range(path, field, value, "[0, inf)"))
        }
    }

    /// A number in the closed unit interval.
    pub(crate) fn fraction(
        &self,
        path: &Utf8Path,
        field: &'static str,
        raw: &str,
    ) -> Result<f64, DataError> {
        let value = self.number_field(path, field, raw)?;
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(self.out_of_range(path, field, value, "[0, 1]"))
        }
    }

    fn number_field(
        &self,
        path: &Utf8Path,
        field: &'static str,
        raw: &str,
    ) -> Result<f64, DataError> {
        let value: f64 = raw.parse().map_err(|_| DataError::InvalidNumber {
            path: path.to_path_buf(),
            line: self.number,
            field,
            value: raw.to_owned(),
        })?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.out_of_range(path, field, value, "finite numbers"))
        }
    }

    fn out_of_range(
        &self,
        path: &Utf8Path,
        field: &'static str,
        value: f64,
        range: &'static str,
    ) -> DataError {
        DataError::OutOfRange {
            path: path.to_path_buf(),
            line: self.number,
            field,
            value,
            range,
        }
    }
}
