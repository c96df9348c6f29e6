//! Human-facing summary of a solved tour.
//!
//! The report lists every stop with a 1-based position, the origin at both
//! ends, and totals the travel time over all legs including the outbound and
//! return legs.

use thiserror::Error;

use crate::{SolveResponse, TourProblem};

/// One entry of the visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportStop {
    /// 1-based position in the tour; the origin is first and last.
    pub position: usize,
    /// Landmark name.
    pub name: String,
}

/// Score, named visiting order and travel time of a solved tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourReport {
    /// Maximised total attractiveness.
    pub score: f64,
    /// Stops from origin to origin.
    pub stops: Vec<ReportStop>,
    /// Sum of travel times over every leg.
    pub total_travel_time: f64,
}

/// Errors returned by [`TourReport::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The tour refers to a landmark the problem does not define.
    #[error("tour refers to unknown landmark index {index}")]
    UnknownLandmark {
        /// The offending index.
        index: usize,
    },
}

impl TourReport {
    /// Build a report for `response`, resolving names and travel times from
    /// `problem`.
    ///
    /// # Examples
    /// ```
    /// use landmark_core::{
    ///     Diagnostics, LandmarkSet, Matrix, SolveResponse, Tour, TourProblem, TourReport,
    /// };
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let problem = TourProblem::new(
    ///     LandmarkSet::new(["Hotel", "Museum"])?,
    ///     Matrix::from_rows(vec![vec![0.0, 2.0], vec![1.0, 0.0]])?,
    ///     Matrix::from_rows(vec![vec![0.0, 10.0], vec![12.0, 0.0]])?,
    /// )?;
    /// let response = SolveResponse {
    ///     tour: Tour::new(vec![1]),
    ///     score: 3.0,
    ///     diagnostics: Diagnostics::default(),
    /// };
    /// let report = TourReport::new(&problem, &response)?;
    /// let names: Vec<_> = report.stops.iter().map(|stop| stop.name.as_str()).collect();
    /// assert_eq!(names, ["Hotel", "Museum", "Hotel"]);
    /// assert_eq!(report.total_travel_time, 22.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(problem: &TourProblem, response: &SolveResponse) -> Result<Self, ReportError> {
        let origin = problem.landmarks.origin_name();
        let mut stops = Vec::with_capacity(response.tour.len() + 2);
        stops.push(ReportStop {
            position: 1,
            name: origin.to_owned(),
        });
        for &index in response.tour.stops() {
            let name = problem
                .landmarks
                .name(index)
                .ok_or(ReportError::UnknownLandmark { index })?;
            stops.push(ReportStop {
                position: stops.len() + 1,
                name: name.to_owned(),
            });
        }
        stops.push(ReportStop {
            position: stops.len() + 1,
            name: origin.to_owned(),
        });

        let total_travel_time = response
            .tour
            .total(&problem.travel_time)
            .ok_or_else(|| first_unknown(problem, response))?;

        Ok(Self {
            score: response.score,
            stops,
            total_travel_time,
        })
    }
}

fn first_unknown(problem: &TourProblem, response: &SolveResponse) -> ReportError {
    let index = response
        .tour
        .stops()
        .iter()
        .copied()
        .find(|&index| index >= problem.travel_time.size())
        .unwrap_or_default();
    ReportError::UnknownLandmark { index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    use crate::test_support::{example_problem, problem_from_rows};
    use crate::{Diagnostics, Tour, TourProblem};

    #[fixture]
    fn problem() -> TourProblem {
        example_problem()
    }

    fn response(stops: Vec<usize>, score: f64) -> SolveResponse {
        SolveResponse {
            tour: Tour::new(stops),
            score,
            diagnostics: Diagnostics::default(),
        }
    }

    #[rstest]
    fn report_counts_every_leg(problem: TourProblem) {
        let report = TourReport::new(&problem, &response(vec![1, 2], 11.0)).expect("report");
        let positions: Vec<_> = report.stops.iter().map(|stop| stop.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
        // 0→1 (7) + 1→2 (9) + 2→0 (4)
        assert!((report.total_travel_time - 20.0).abs() < f64::EPSILON);
        assert!((report.score - 11.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn origin_only_report() {
        let problem = problem_from_rows(&["Hotel"], vec![vec![0.0]], vec![vec![0.0]]);
        let report = TourReport::new(&problem, &response(Vec::new(), 0.0)).expect("report");
        assert_eq!(report.stops.len(), 2);
        assert!(report.stops.iter().all(|stop| stop.name == "Hotel"));
        assert!(report.total_travel_time.abs() < f64::EPSILON);
    }

    #[rstest]
    fn unknown_landmark_is_reported(problem: TourProblem) {
        let err = TourReport::new(&problem, &response(vec![1, 7], 0.0)).expect_err("unknown");
        assert_eq!(err, ReportError::UnknownLandmark { index: 7 });
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn report_serialises_to_json(problem: TourProblem) {
        let report = TourReport::new(&problem, &response(vec![1, 2], 11.0)).expect("report");
        let value = serde_json::to_value(&report).expect("serialise report");
        assert_eq!(value["stops"][1]["name"], "Museum");
        assert_eq!(value["stops"][3]["position"], 4);
        assert_eq!(value["score"], 11.0);
    }
}
