//! Facade crate for the landmark tour planner.
//!
//! This crate re-exports the core domain types and exposes the exact solver
//! and the data file loader behind feature flags.
//!
//! # Examples
//! ```
//! use landmark_tour::{DpSolver, LandmarkSet, Matrix, Solver, TourProblem};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let problem = TourProblem::new(
//!     LandmarkSet::new(["Hotel", "Museum", "Harbour"])?,
//!     Matrix::from_rows(vec![
//!         vec![0.0, 5.0, 1.0],
//!         vec![3.0, 0.0, 4.0],
//!         vec![2.0, 6.0, 0.0],
//!     ])?,
//!     Matrix::from_rows(vec![
//!         vec![0.0, 7.0, 3.0],
//!         vec![5.0, 0.0, 9.0],
//!         vec![4.0, 8.0, 0.0],
//!     ])?,
//! )?;
//! let response = DpSolver::new().solve(&problem)?;
//! assert_eq!(response.tour.stops(), &[1, 2]);
//! assert_eq!(response.tour.total(&problem.travel_time), Some(20.0));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use landmark_core::{
    Diagnostics, LandmarkSet, LandmarkSetError, Matrix, MatrixError, ORIGIN, ProblemError,
    ReportError, ReportStop, SolveError, SolveResponse, Solver, Tour, TourProblem, TourReport,
};

#[cfg(feature = "solver-dp")]
pub use landmark_solver_dp::{DpSolver, DpSolverConfig, DpStrategy};

#[cfg(feature = "data")]
pub use landmark_data::{DataError, DataPaths, MatrixBuilder, load_problem};
