//! Exact subset dynamic-programming solver for landmark tours.
//!
//! This crate provides [`DpSolver`], an implementation of the
//! [`Solver`](landmark_core::Solver) trait that finds the most attractive
//! closed tour from the origin through every landmark and back. It evaluates
//! every `(visited set, position)` state once, records the best next landmark
//! for each, and replays those choices to recover the tour.
//!
//! The state space holds `2^N · N` cells, so the solver is only practical for
//! modest landmark counts. [`DpSolverConfig`] caps the landmark count and the
//! table size, and both are checked before any allocation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod reconstruct;
mod solver;
mod table;

pub use config::{DpSolverConfig, DpStrategy};
pub use solver::{DpContext, DpSolver};
pub use table::{MAX_MASK_WIDTH, StateCell, StateTable, VisitedSet};
