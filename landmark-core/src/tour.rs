//! Closed tours through the landmarks.
//!
//! A [`Tour`] stores the visiting order without the origin; the origin is
//! implied at both ends.

use std::iter;

use crate::{Matrix, ORIGIN};

/// Ordered landmark indices visited between leaving and returning to the
/// origin.
///
/// # Examples
/// ```
/// use landmark_core::Tour;
///
/// let tour = Tour::new(vec![1, 2]);
/// let legs: Vec<_> = tour.legs().collect();
/// assert_eq!(legs, vec![(0, 1), (1, 2), (2, 0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Construct a tour from its stops, excluding the origin.
    #[must_use]
    pub const fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Construct the empty tour (origin straight back to origin).
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Landmarks in visiting order, origin excluded.
    #[must_use]
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops, origin excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the tour visits no landmark besides the origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Directed legs from the origin through every stop and back.
    ///
    /// The empty tour has the single leg `origin → origin`.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let from = iter::once(ORIGIN).chain(self.stops.iter().copied());
        let to = self.stops.iter().copied().chain(iter::once(ORIGIN));
        from.zip(to)
    }

    /// Sum `matrix` over every leg of the tour.
    ///
    /// Legs are added from the return leg backwards, the order in which
    /// solvers accumulate the remaining score, so the total reproduces a
    /// solver's score bit for bit. Returns `None` when a stop is outside the
    /// matrix.
    ///
    /// # Examples
    /// ```
    /// use landmark_core::{Matrix, Tour};
    ///
    /// let matrix = Matrix::from_rows(vec![
    ///     vec![0.0, 5.0, 1.0],
    ///     vec![3.0, 0.0, 4.0],
    ///     vec![2.0, 6.0, 0.0],
    /// ])?;
    /// assert_eq!(Tour::new(vec![1, 2]).total(&matrix), Some(11.0));
    /// assert_eq!(Tour::new(vec![2, 1]).total(&matrix), Some(10.0));
    /// # Ok::<(), landmark_core::MatrixError>(())
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "tour totals are sums of floating-point leg weights"
    )]
    pub fn total(&self, matrix: &Matrix) -> Option<f64> {
        let legs: Vec<(usize, usize)> = self.legs().collect();
        let mut backwards = legs.into_iter().rev();
        let (last_from, last_to) = backwards.next()?;
        let closing = matrix.get(last_from, last_to)?;
        backwards.try_fold(closing, |tail, (from, to)| Some(matrix.get(from, to)? + tail))
    }
}
