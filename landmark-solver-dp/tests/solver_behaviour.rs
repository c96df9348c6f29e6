//! Behavioural tests for `DpSolver` using rstest-bdd.

use std::cell::RefCell;

use landmark_core::test_support::{example_problem, problem_with_unit_travel};
use landmark_core::{SolveError, SolveResponse, Solver, TourProblem};
use landmark_solver_dp::{DpSolver, DpSolverConfig, DpStrategy};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct SolverWorld {
    problem: RefCell<Option<TourProblem>>,
    config: RefCell<DpSolverConfig>,
    outcome: RefCell<Option<Result<SolveResponse, SolveError>>>,
}

impl SolverWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<SolveResponse, SolveError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_response(&self) -> SolveResponse {
        self.expect_outcome().expect("expected solve success")
    }

    fn stop_names(&self) -> Vec<String> {
        let response = self.expect_response();
        let problem = self.problem.borrow();
        response
            .tour
            .stops()
            .iter()
            .filter_map(|&idx| {
                problem
                    .as_ref()
                    .and_then(|problem| problem.landmarks.name(idx))
                    .map(str::to_owned)
            })
            .collect()
    }
}

#[fixture]
fn world() -> SolverWorld {
    SolverWorld::default()
}

#[given("the Hotel, Museum and Harbour problem")]
fn given_example_problem(world: &SolverWorld) {
    world.problem.replace(Some(example_problem()));
}

#[given("a three landmark problem where every leg scores 1")]
fn given_tied_problem(world: &SolverWorld) {
    let rows = (0..3)
        .map(|from| (0..3).map(|to| if from == to { 0.0 } else { 1.0 }).collect())
        .collect();
    world.problem.replace(Some(problem_with_unit_travel(rows)));
}

#[given("a problem containing only the hotel")]
fn given_origin_only(world: &SolverWorld) {
    world
        .problem
        .replace(Some(problem_with_unit_travel(vec![vec![0.0]])));
}

#[given("a five landmark problem")]
fn given_five_landmarks(world: &SolverWorld) {
    world
        .problem
        .replace(Some(problem_with_unit_travel(vec![vec![0.0; 5]; 5])));
}

#[given("the bottom-up strategy")]
fn given_bottom_up(world: &SolverWorld) {
    world.config.borrow_mut().strategy = DpStrategy::BottomUp;
}

#[given("the top-down strategy")]
fn given_top_down(world: &SolverWorld) {
    world.config.borrow_mut().strategy = DpStrategy::TopDown;
}

#[given("a landmark limit of 4")]
fn given_landmark_limit(world: &SolverWorld) {
    world.config.borrow_mut().max_landmarks = 4;
}

#[when("the tour is planned")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_planned(world: &SolverWorld) {
    let solver = DpSolver::with_config(world.config.borrow().clone());
    let outcome = {
        let problem = world.problem.borrow();
        solver.solve(problem.as_ref().expect("problem should be given"))
    };
    world.outcome.replace(Some(outcome));
}

#[then("the tour visits Museum then Harbour")]
fn then_museum_harbour(world: &SolverWorld) {
    assert_eq!(world.stop_names(), ["Museum", "Harbour"]);
}

#[then("the tour visits L1 then L2")]
fn then_l1_l2(world: &SolverWorld) {
    assert_eq!(world.stop_names(), ["L1", "L2"]);
}

#[then("the tour has no stops")]
fn then_no_stops(world: &SolverWorld) {
    assert!(world.expect_response().tour.is_empty());
}

#[then("the tour scores 11")]
fn then_scores_eleven(world: &SolverWorld) {
    assert_eq!(world.expect_response().score.to_bits(), 11.0_f64.to_bits());
}

#[then("the tour scores 3")]
fn then_scores_three(world: &SolverWorld) {
    assert_eq!(world.expect_response().score.to_bits(), 3.0_f64.to_bits());
}

#[then("the tour scores 0")]
fn then_scores_zero(world: &SolverWorld) {
    assert_eq!(world.expect_response().score.to_bits(), 0.0_f64.to_bits());
}

#[then("planning fails because there are too many landmarks")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_too_many(world: &SolverWorld) {
    let err = world.expect_outcome().expect_err("expected a size error");
    assert_eq!(err, SolveError::TooManyLandmarks { count: 5, limit: 4 });
}

#[scenario(path = "tests/features/dp_solver.feature", index = 0)]
fn most_attractive_order(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dp_solver.feature", index = 1)]
fn top_down_agrees(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dp_solver.feature", index = 2)]
fn ties_keep_lower_index(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dp_solver.feature", index = 3)]
fn lone_origin(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dp_solver.feature", index = 4)]
fn oversized_problem(world: SolverWorld) {
    let _ = world;
}
