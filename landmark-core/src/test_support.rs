//! Shared fixtures for unit and behaviour tests.
//!
//! Builders here panic on invalid input; they are only meant for test data.

use crate::{LandmarkSet, Matrix, TourProblem};

/// Build a problem from names and nested rows.
///
/// # Panics
/// Panics when the rows do not form valid matrices for `names`.
#[expect(clippy::expect_used, reason = "fixture builders fail fast on bad data")]
#[must_use]
pub fn problem_from_rows(
    names: &[&str],
    attractiveness: Vec<Vec<f64>>,
    travel_time: Vec<Vec<f64>>,
) -> TourProblem {
    TourProblem::new(
        LandmarkSet::new(names.iter().copied()).expect("fixture landmark names"),
        Matrix::from_rows(attractiveness).expect("fixture attractiveness"),
        Matrix::from_rows(travel_time).expect("fixture travel times"),
    )
    .expect("fixture problem")
}

/// Build a problem whose travel times are all one unit off the diagonal.
///
/// Landmarks are named `Hotel`, `L1`, `L2`, and so on.
#[must_use]
pub fn problem_with_unit_travel(attractiveness: Vec<Vec<f64>>) -> TourProblem {
    let size = attractiveness.len();
    let names: Vec<String> = (0..size)
        .map(|idx| {
            if idx == 0 {
                "Hotel".to_owned()
            } else {
                format!("L{idx}")
            }
        })
        .collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let travel_time = (0..size)
        .map(|from| {
            (0..size)
                .map(|to| if from == to { 0.0 } else { 1.0 })
                .collect()
        })
        .collect();
    problem_from_rows(&name_refs, attractiveness, travel_time)
}

/// Three-landmark problem whose best tour is `Hotel → Museum → Harbour → Hotel`
/// with attractiveness 11 and travel time 20.
#[must_use]
pub fn example_problem() -> TourProblem {
    problem_from_rows(
        &["Hotel", "Museum", "Harbour"],
        vec![
            vec![0.0, 5.0, 1.0],
            vec![3.0, 0.0, 4.0],
            vec![2.0, 6.0, 0.0],
        ],
        vec![
            vec![0.0, 7.0, 3.0],
            vec![5.0, 0.0, 9.0],
            vec![4.0, 8.0, 0.0],
        ],
    )
}
