//! Derives attractiveness and travel-time matrices from the input tables.

use landmark_core::{LandmarkSet, Matrix, TourProblem};

use crate::DataError;
use crate::map::MapRecord;
use crate::weights::WeightTable;

/// Combines interest, load and map records into a [`TourProblem`].
///
/// The landmark order is the interest table order, optionally truncated to
/// the first `limit` entries. The leg `i → j` scores
/// `(1 − load[j]) · interest[j] · base[i][j]`.
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use landmark_data::{MatrixBuilder, parse_interest, parse_load, parse_map};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = Utf8Path::new("inline");
/// let interest = parse_interest(path, "Name\tInterest\nHotel\t0\nMuseum\t0.5\n")?;
/// let load = parse_load(path, "Name\tLoad\nHotel\t0\nMuseum\t0.5\n")?;
/// let map = parse_map(
///     path,
///     "From\tTo\tBase\tTime\nHotel\tMuseum\t8\t10\nMuseum\tHotel\t4\t12\n",
/// )?;
/// let problem = MatrixBuilder::new(interest, load).build(&map)?;
/// assert_eq!(problem.attractiveness.get(0, 1), Some(2.0));
/// assert_eq!(problem.attractiveness.get(1, 0), Some(0.0));
/// assert_eq!(problem.travel_time.get(1, 0), Some(12.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    interest: WeightTable,
    load: WeightTable,
    limit: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Leg {
    base: f64,
    time: f64,
    line: usize,
}

impl MatrixBuilder {
    /// Builder over every landmark of `interest`.
    #[must_use]
    pub const fn new(interest: WeightTable, load: WeightTable) -> Self {
        Self {
            interest,
            load,
            limit: None,
        }
    }

    /// Keep only the first `limit` landmarks, origin included.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn selected(&self) -> Result<usize, DataError> {
        let available = self.interest.len();
        if available == 0 {
            return Err(DataError::NoLandmarks);
        }
        match self.limit {
            None => Ok(available),
            Some(requested) if (1..=available).contains(&requested) => Ok(requested),
            Some(requested) => Err(DataError::InvalidLimit {
                requested,
                available,
            }),
        }
    }

    /// Resolve `records` against the selected landmarks and assemble the
    /// problem.
    ///
    /// # Errors
    /// Returns a [`DataError`] when the limit is invalid, a selected landmark
    /// lacks a load, a record names an unknown landmark, links a landmark to
    /// itself or repeats a pair, or an ordered pair of selected landmarks has
    /// no record.
    pub fn build(&self, records: &[MapRecord]) -> Result<TourProblem, DataError> {
        let count = self.selected()?;
        let landmarks = LandmarkSet::new(
            self.interest
                .iter()
                .take(count)
                .map(|entry| entry.name.clone()),
        )?;
        let weights = self.destination_weights(&landmarks)?;
        let legs = self.place(records, &landmarks)?;

        let mut attractiveness = Vec::with_capacity(count);
        let mut travel_time = Vec::with_capacity(count);
        for (from, row) in legs.chunks(count).enumerate() {
            let mut scores = Vec::with_capacity(count);
            let mut times = Vec::with_capacity(count);
            for ((to, leg), weight) in row.iter().enumerate().zip(&weights) {
                let (score, time) = if from == to {
                    (0.0, 0.0)
                } else {
                    let found = leg.ok_or_else(|| missing_pair(&landmarks, from, to))?;
                    (leg_score(*weight, found.base), found.time)
                };
                scores.push(score);
                times.push(time);
            }
            attractiveness.push(scores);
            travel_time.push(times);
        }

        Ok(TourProblem::new(
            landmarks,
            Matrix::from_rows(attractiveness)?,
            Matrix::from_rows(travel_time)?,
        )?)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the load discount is a floating-point complement"
    )]
    fn destination_weights(&self, landmarks: &LandmarkSet) -> Result<Vec<f64>, DataError> {
        landmarks
            .iter()
            .map(|name| {
                let interest = self.interest.get(name).unwrap_or_default();
                let load = self.load.get(name).ok_or_else(|| DataError::MissingLoad {
                    name: name.to_owned(),
                })?;
                Ok((1.0 - load) * interest)
            })
            .collect()
    }

    fn place(
        &self,
        records: &[MapRecord],
        landmarks: &LandmarkSet,
    ) -> Result<Vec<Option<Leg>>, DataError> {
        let count = landmarks.len();
        let mut legs = vec![None; count * count];
        for record in records {
            let from = self.resolve(record, &record.from)?;
            let to = self.resolve(record, &record.to)?;
            if from == to {
                return Err(DataError::SelfPair {
                    line: record.line,
                    name: record.from.clone(),
                });
            }
            if from >= count || to >= count {
                log::debug!(
                    "map line {}: skipping {} -> {} outside the first {count} landmarks",
                    record.line,
                    record.from,
                    record.to
                );
                continue;
            }
            let Some(slot) = legs.get_mut(from * count + to) else {
                continue;
            };
            if let Some(first) = slot.as_ref().map(|leg: &Leg| leg.line) {
                return Err(DataError::DuplicatePair {
                    line: record.line,
                    from: record.from.clone(),
                    to: record.to.clone(),
                    first,
                });
            }
            *slot = Some(Leg {
                base: record.base,
                time: record.time,
                line: record.line,
            });
        }
        Ok(legs)
    }

    fn resolve(&self, record: &MapRecord, name: &str) -> Result<usize, DataError> {
        self.interest
            .position(name)
            .ok_or_else(|| DataError::UnknownLandmark {
                line: record.line,
                name: name.to_owned(),
            })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "leg attractiveness is a floating-point product"
)]
fn leg_score(destination_weight: f64, base: f64) -> f64 {
    destination_weight * base
}

fn missing_pair(landmarks: &LandmarkSet, from: usize, to: usize) -> DataError {
    let name = |idx| landmarks.name(idx).unwrap_or_default().to_owned();
    DataError::MissingPair {
        from: name(from),
        to: name(to),
    }
}
