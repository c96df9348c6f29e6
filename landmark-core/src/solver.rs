//! The solver seam and the response it produces.

use std::time::Duration;

use thiserror::Error;

use crate::{Tour, TourProblem};

/// Response from a successful solve.
///
/// Contains the chosen [`Tour`] and the attractiveness it collects, including
/// the outbound and return legs at the origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// The ordered visiting sequence.
    pub tour: Tour,
    /// Total attractiveness accumulated along the tour.
    pub score: f64,
    /// Metrics describing how the solve went.
    pub diagnostics: Diagnostics,
}

/// Metrics gathered while solving.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Number of `(visited, position)` states evaluated.
    pub states_evaluated: u64,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The landmark count exceeds what the solver can represent or is
    /// configured to accept.
    #[error("{count} landmarks exceed the supported maximum of {limit}")]
    TooManyLandmarks {
        /// Landmarks in the problem, origin included.
        count: usize,
        /// Largest accepted count.
        limit: usize,
    },
    /// The state tables would not fit in the configured memory limit.
    #[error("{count} landmarks need {required_bytes} bytes of state, limit is {limit_bytes}")]
    TableTooLarge {
        /// Landmarks in the problem, origin included.
        count: usize,
        /// Bytes the tables would occupy (saturated on overflow).
        required_bytes: u64,
        /// Configured ceiling.
        limit_bytes: u64,
    },
    /// The solver evaluated more states than its budget allows.
    #[error("state budget of {limit} evaluations exhausted")]
    BudgetExhausted {
        /// The configured budget.
        limit: u64,
    },
    /// The solver's tables contradict their own invariants.
    #[error("state table is inconsistent at visited set {visited:#b}, position {position}")]
    InconsistentTable {
        /// Visited-set mask of the offending state.
        visited: u32,
        /// Position of the offending state.
        position: usize,
    },
}

/// Find the most attractive closed tour for a problem.
///
/// Implementations must return an error rather than panicking, and must be
/// `Send + Sync` so they can be shared across threads.
///
/// # Examples
/// ```rust
/// use landmark_core::{Diagnostics, SolveError, SolveResponse, Solver, Tour, TourProblem};
///
/// struct InOrder;
///
/// impl Solver for InOrder {
///     fn solve(&self, problem: &TourProblem) -> Result<SolveResponse, SolveError> {
///         let tour = Tour::new((1..problem.landmark_count()).collect());
///         let score = tour.total(&problem.attractiveness).unwrap_or_default();
///         Ok(SolveResponse { tour, score, diagnostics: Diagnostics::default() })
///     }
/// }
/// ```
pub trait Solver: Send + Sync {
    /// Solve a problem, producing a tour or an error.
    fn solve(&self, problem: &TourProblem) -> Result<SolveResponse, SolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::example_problem;

    struct InOrderSolver;

    impl Solver for InOrderSolver {
        fn solve(&self, problem: &TourProblem) -> Result<SolveResponse, SolveError> {
            if problem.landmark_count() > 4 {
                return Err(SolveError::TooManyLandmarks {
                    count: problem.landmark_count(),
                    limit: 4,
                });
            }
            let tour = Tour::new((1..problem.landmark_count()).collect());
            let score = tour.total(&problem.attractiveness).unwrap_or_default();
            Ok(SolveResponse {
                tour,
                score,
                diagnostics: Diagnostics::default(),
            })
        }
    }

    #[rstest]
    fn solver_trait_objects_are_usable() {
        let solver: Box<dyn Solver> = Box::new(InOrderSolver);
        let response = solver.solve(&example_problem()).expect("solve");
        assert_eq!(response.tour.stops(), &[1, 2]);
        assert!((response.score - 11.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn errors_render_context() {
        let err = SolveError::InconsistentTable {
            visited: 0b101,
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "state table is inconsistent at visited set 0b101, position 2"
        );
    }
}
