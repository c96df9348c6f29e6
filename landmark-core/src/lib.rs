//! Core domain types for the landmark tour planner.
//!
//! A tour starts at the origin (index 0, conventionally the hotel), visits
//! every other landmark exactly once and returns to the origin. Solvers pick
//! the visiting order that maximises the summed attractiveness of the legs
//! travelled. These models validate their input on construction so solvers can
//! assume well-formed matrices.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod landmark;
pub mod matrix;
pub mod problem;
pub mod report;
pub mod solver;
pub mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use landmark::{LandmarkSet, LandmarkSetError, ORIGIN};
pub use matrix::{Matrix, MatrixError};
pub use problem::{ProblemError, TourProblem};
pub use report::{ReportError, ReportStop, TourReport};
pub use solver::{Diagnostics, SolveError, SolveResponse, Solver};
pub use tour::Tour;
