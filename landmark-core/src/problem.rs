//! A validated planning problem: landmarks plus their two edge matrices.

use thiserror::Error;

use crate::{LandmarkSet, Matrix};

/// Landmarks with their attractiveness and travel-time matrices.
///
/// `attractiveness` drives the optimisation; `travel_time` is only used when
/// reporting on a finished tour.
#[derive(Debug, Clone, PartialEq)]
pub struct TourProblem {
    /// Landmark names; index 0 is the origin.
    pub landmarks: LandmarkSet,
    /// Score for travelling each directed leg.
    pub attractiveness: Matrix,
    /// Duration of each directed leg.
    pub travel_time: Matrix,
}

/// Errors returned by [`TourProblem::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// A matrix does not have one row per landmark.
    #[error("{matrix} matrix is {found}x{found} but there are {expected} landmarks")]
    SizeMismatch {
        /// Which matrix was rejected.
        matrix: &'static str,
        /// Landmark count.
        expected: usize,
        /// Matrix size.
        found: usize,
    },
}

impl TourProblem {
    /// Combine landmarks and matrices, checking that their sizes agree.
    ///
    /// # Examples
    /// ```
    /// use landmark_core::{LandmarkSet, Matrix, TourProblem};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let landmarks = LandmarkSet::new(["Hotel", "Museum"])?;
    /// let attractiveness = Matrix::from_rows(vec![vec![0.0, 2.0], vec![1.0, 0.0]])?;
    /// let travel_time = Matrix::from_rows(vec![vec![0.0, 10.0], vec![12.0, 0.0]])?;
    /// let problem = TourProblem::new(landmarks, attractiveness, travel_time)?;
    /// assert_eq!(problem.landmark_count(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        landmarks: LandmarkSet,
        attractiveness: Matrix,
        travel_time: Matrix,
    ) -> Result<Self, ProblemError> {
        let expected = landmarks.len();
        for (matrix, found) in [
            ("attractiveness", attractiveness.size()),
            ("travel time", travel_time.size()),
        ] {
            if found != expected {
                return Err(ProblemError::SizeMismatch {
                    matrix,
                    expected,
                    found,
                });
            }
        }
        Ok(Self {
            landmarks,
            attractiveness,
            travel_time,
        })
    }

    /// Number of landmarks, origin included.
    #[must_use]
    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }
}
