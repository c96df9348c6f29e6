//! Square matrices of non-negative edge weights.
//!
//! Both the attractiveness matrix and the travel-time matrix use this type.
//! `matrix.get(i, j)` is the weight of the directed leg from landmark `i` to
//! landmark `j`. Diagonal entries are zero.

use thiserror::Error;

/// Read-only square matrix of finite, non-negative weights with a zero
/// diagonal.
///
/// # Examples
/// ```
/// use landmark_core::Matrix;
///
/// # fn main() -> Result<(), landmark_core::MatrixError> {
/// let matrix = Matrix::from_rows(vec![vec![0.0, 5.0], vec![3.0, 0.0]])?;
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.get(0, 1), Some(5.0));
/// assert_eq!(matrix.get(2, 0), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    size: usize,
    cells: Vec<f64>,
}

/// Errors returned when constructing a [`Matrix`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The matrix has no rows.
    #[error("matrix must have at least one row")]
    Empty,
    /// A row length does not match the number of rows.
    #[error("row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Required row length.
        expected: usize,
        /// Actual row length.
        found: usize,
    },
    /// An entry is NaN or infinite.
    #[error("entry ({row}, {col}) is not finite")]
    NonFinite {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },
    /// An entry is below zero.
    #[error("entry ({row}, {col}) is negative: {value}")]
    Negative {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// The rejected value.
        value: f64,
    },
    /// A diagonal entry is not zero.
    #[error("diagonal entry {index} must be zero, found {value}")]
    NonZeroDiagonal {
        /// Landmark index of the diagonal entry.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}

impl Matrix {
    /// Validate and construct a matrix from nested rows.
    ///
    /// # Errors
    /// Returns [`MatrixError`] when the rows are empty, ragged, non-finite,
    /// negative or carry a non-zero diagonal.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        let matrix = Self { size, cells };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Validate and construct a `size × size` matrix from a cell function.
    ///
    /// # Examples
    /// ```
    /// use landmark_core::Matrix;
    ///
    /// let unit = Matrix::from_fn(3, |from, to| if from == to { 0.0 } else { 1.0 })?;
    /// assert_eq!(unit.get(1, 2), Some(1.0));
    /// # Ok::<(), landmark_core::MatrixError>(())
    /// ```
    pub fn from_fn<F>(size: usize, mut cell: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| cell(row, col))
            .collect();
        let matrix = Self { size, cells };
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> Result<(), MatrixError> {
        for (offset, &value) in self.cells.iter().enumerate() {
            let (row, col) = self.position(offset);
            if !value.is_finite() {
                return Err(MatrixError::NonFinite { row, col });
            }
            if value < 0.0 {
                return Err(MatrixError::Negative { row, col, value });
            }
            if row == col && value != 0.0 {
                return Err(MatrixError::NonZeroDiagonal { index: row, value });
            }
        }
        Ok(())
    }

    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "row-major offsets decompose into row and column"
    )]
    const fn position(&self, offset: usize) -> (usize, usize) {
        (offset / self.size, offset % self.size)
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Weight of the leg `from → to`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.cells.get(from * self.size + to).copied()
    }

    /// All weights leaving `from`, in destination order.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[f64]> {
        let start = from.checked_mul(self.size)?;
        let end = start.checked_add(self.size)?;
        self.cells.get(start..end)
    }
}
