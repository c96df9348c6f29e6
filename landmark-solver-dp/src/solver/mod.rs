//! `DpSolver` and the per-run `DpContext` that owns the state table.

use std::time::Instant;

use landmark_core::{Diagnostics, Matrix, ORIGIN, SolveError, SolveResponse, Solver, TourProblem};

use crate::config::{DpSolverConfig, DpStrategy};
use crate::table::{MAX_MASK_WIDTH, StateCell, StateTable, VisitedSet};

/// Exact solver maximising total attractiveness over every visiting order.
///
/// The solver holds configuration only. Each call to [`Solver::solve`] builds
/// a fresh [`DpContext`], so no table is shared between runs.
///
/// # Examples
/// ```
/// use landmark_core::{LandmarkSet, Matrix, Solver, TourProblem};
/// use landmark_solver_dp::DpSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let problem = TourProblem::new(
///     LandmarkSet::new(["Hotel", "Museum", "Harbour"])?,
///     Matrix::from_rows(vec![
///         vec![0.0, 5.0, 1.0],
///         vec![3.0, 0.0, 4.0],
///         vec![2.0, 6.0, 0.0],
///     ])?,
///     Matrix::from_fn(3, |from, to| if from == to { 0.0 } else { 1.0 })?,
/// )?;
/// let response = DpSolver::new().solve(&problem)?;
/// assert_eq!(response.tour.stops(), &[1, 2]);
/// assert_eq!(response.score, 11.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DpSolver {
    config: DpSolverConfig,
}

impl DpSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: DpSolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &DpSolverConfig {
        &self.config
    }
}

impl Solver for DpSolver {
    fn solve(&self, problem: &TourProblem) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        let mut context = DpContext::new(&problem.attractiveness, &self.config)?;
        let score = context.run(self.config.strategy)?;
        let tour = context.tour()?;
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            states_evaluated: context.states_evaluated(),
        };
        log::debug!(
            "solved {} landmarks: score {score}, {} states in {:?}",
            problem.landmark_count(),
            diagnostics.states_evaluated,
            diagnostics.solve_time
        );
        Ok(SolveResponse {
            tour,
            score,
            diagnostics,
        })
    }
}

/// Tracks the best continuation seen so far.
///
/// The first candidate is always taken and later ones only replace it when
/// strictly greater, so ties keep the lowest landmark index.
#[derive(Debug, Default)]
struct Best(Option<(f64, usize)>);

impl Best {
    fn consider(&mut self, landmark: usize, score: f64) {
        if self.0.is_none_or(|(best, _)| score > best) {
            self.0 = Some((score, landmark));
        }
    }
}

/// State table and attractiveness matrix for one solve.
///
/// `evaluate(mask, pos)` is the best attractiveness collectable from `pos`
/// with `mask` already visited, finishing with the leg back to the origin.
#[derive(Debug)]
pub struct DpContext<'a> {
    attractiveness: &'a Matrix,
    count: usize,
    full: VisitedSet,
    table: StateTable,
    budget: Option<u64>,
    evaluated: u64,
}

impl<'a> DpContext<'a> {
    /// Size-check and allocate the table for `attractiveness`.
    ///
    /// # Errors
    /// Returns [`SolveError::TooManyLandmarks`] when the landmark count
    /// exceeds the configured or representable maximum, and
    /// [`SolveError::TableTooLarge`] when the table would exceed
    /// `max_table_bytes`. Both are checked before allocating.
    pub fn new(attractiveness: &'a Matrix, config: &DpSolverConfig) -> Result<Self, SolveError> {
        let count = attractiveness.size();
        let limit = config.max_landmarks.min(MAX_MASK_WIDTH);
        let too_many = SolveError::TooManyLandmarks { count, limit };
        if count > limit {
            return Err(too_many);
        }
        let full = VisitedSet::full(count).ok_or(too_many)?;
        let required_bytes = StateTable::required_bytes(count).unwrap_or(u64::MAX);
        if required_bytes > config.max_table_bytes {
            return Err(SolveError::TableTooLarge {
                count,
                required_bytes,
                limit_bytes: config.max_table_bytes,
            });
        }
        log::debug!("allocating state table for {count} landmarks ({required_bytes} bytes)");
        Ok(Self {
            attractiveness,
            count,
            full,
            table: StateTable::new(count),
            budget: config.state_budget,
            evaluated: 0,
        })
    }

    /// Landmarks in the problem, origin included.
    #[must_use]
    pub const fn landmark_count(&self) -> usize {
        self.count
    }

    /// States computed so far.
    #[must_use]
    pub const fn states_evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Read-only view of the state table.
    #[must_use]
    pub const fn table(&self) -> &StateTable {
        &self.table
    }

    /// The set with every landmark visited.
    #[must_use]
    pub const fn full_set(&self) -> VisitedSet {
        self.full
    }

    /// Fill the table with `strategy` and return the best score from the
    /// start state.
    ///
    /// # Errors
    /// Propagates [`SolveError::BudgetExhausted`] and
    /// [`SolveError::InconsistentTable`].
    pub fn run(&mut self, strategy: DpStrategy) -> Result<f64, SolveError> {
        match strategy {
            DpStrategy::BottomUp => self.fill(),
            DpStrategy::TopDown => self.evaluate(VisitedSet::start(), ORIGIN),
        }
    }

    /// Memoised recursive evaluation of one state.
    ///
    /// A computed state is returned as stored without recursing. Recursion
    /// depth is bounded by the number of unvisited landmarks.
    ///
    /// # Errors
    /// Returns [`SolveError::InconsistentTable`] for states that cannot occur
    /// (origin unvisited, `position` unvisited, or landmarks outside the
    /// problem) and [`SolveError::BudgetExhausted`] once the budget runs out.
    #[expect(
        clippy::float_arithmetic,
        reason = "state scores add floating-point leg weights"
    )]
    pub fn evaluate(&mut self, set: VisitedSet, position: usize) -> Result<f64, SolveError> {
        self.check_state(set, position)?;
        if let Some(cell) = self.table.get(set, position) {
            return Ok(cell.score());
        }
        let cell = if set == self.full {
            StateCell::terminal(self.weight(position, ORIGIN)?)
        } else {
            let mut best = Best::default();
            for next in set.unvisited(self.count) {
                let tail = self.evaluate(set.with(next), next)?;
                best.consider(next, self.weight(position, next)? + tail);
            }
            self.continuation(set, position, best)?
        };
        self.store(set, position, cell)?;
        Ok(cell.score())
    }

    /// Fill every reachable state without recursion and return the score of
    /// the start state.
    ///
    /// Masks are visited in decreasing numeric order. Adding a landmark always
    /// produces a larger mask, so each state's successors are already stored
    /// when it is computed. Only masks containing the origin are visited, and
    /// the origin is only a valid position in the start state.
    ///
    /// # Errors
    /// Returns [`SolveError::InconsistentTable`] if a successor is missing and
    /// [`SolveError::BudgetExhausted`] once the budget runs out.
    #[expect(
        clippy::float_arithmetic,
        reason = "state scores add floating-point leg weights"
    )]
    pub fn fill(&mut self) -> Result<f64, SolveError> {
        let start = VisitedSet::start();
        for bits in (1..=self.full.bits()).rev().step_by(2) {
            let set = VisitedSet::from_bits(bits);
            for position in set.members(self.count) {
                if position == ORIGIN && set != start {
                    continue;
                }
                if self.table.get(set, position).is_some() {
                    continue;
                }
                let cell = if set == self.full {
                    StateCell::terminal(self.weight(position, ORIGIN)?)
                } else {
                    let mut best = Best::default();
                    for next in set.unvisited(self.count) {
                        let successor = set.with(next);
                        let tail = self
                            .table
                            .get(successor, next)
                            .ok_or_else(|| self.inconsistent(successor, next))?;
                        best.consider(next, self.weight(position, next)? + tail.score());
                    }
                    self.continuation(set, position, best)?
                };
                self.store(set, position, cell)?;
            }
        }
        self.table
            .get(start, ORIGIN)
            .map(StateCell::score)
            .ok_or_else(|| self.inconsistent(start, ORIGIN))
    }

    fn check_state(&self, set: VisitedSet, position: usize) -> Result<(), SolveError> {
        if set.fits(self.count) && set.contains(ORIGIN) && set.contains(position) {
            Ok(())
        } else {
            Err(self.inconsistent(set, position))
        }
    }

    fn weight(&self, from: usize, to: usize) -> Result<f64, SolveError> {
        self.attractiveness
            .get(from, to)
            .ok_or_else(|| self.inconsistent(VisitedSet::start().with(from), from))
    }

    fn continuation(
        &self,
        set: VisitedSet,
        position: usize,
        best: Best,
    ) -> Result<StateCell, SolveError> {
        best.0
            .and_then(|(score, next)| StateCell::continue_to(score, next))
            .ok_or_else(|| self.inconsistent(set, position))
    }

    fn store(&mut self, set: VisitedSet, position: usize, cell: StateCell) -> Result<(), SolveError> {
        self.evaluated += 1;
        if let Some(limit) = self.budget
            && self.evaluated > limit
        {
            return Err(SolveError::BudgetExhausted { limit });
        }
        if self.table.insert(set, position, cell) {
            Ok(())
        } else {
            Err(self.inconsistent(set, position))
        }
    }

    pub(crate) fn inconsistent(&self, set: VisitedSet, position: usize) -> SolveError {
        log::error!(
            "state table inconsistency at visited set {:#b}, position {position} ({} landmarks)",
            set.bits(),
            self.count
        );
        SolveError::InconsistentTable {
            visited: set.bits(),
            position,
        }
    }

    #[cfg(test)]
    pub(crate) fn table_mut(&mut self) -> &mut StateTable {
        &mut self.table
    }
}
