//! Input files for the landmark tour planner.
//!
//! Responsibilities:
//! - Read the personal interest, visitor load and landmark map tables.
//! - Derive the attractiveness and travel-time matrices from them.
//!
//! Boundaries:
//! - No solving or reporting; those live in `landmark-core` and the solver
//!   crates.
//!
//! All three files are tab separated. The first line is a header and blank
//! lines are ignored.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use landmark_core::TourProblem;

mod builder;
mod error;
pub mod fs;
mod map;
mod parse;
mod weights;

pub use builder::MatrixBuilder;
pub use error::DataError;
pub use map::{MapRecord, parse_map, read_map};
pub use weights::{WeightEntry, WeightTable, parse_interest, parse_load, read_interest, read_load};

/// Default personal interest file name.
pub const INTEREST_FILE: &str = "personal_interest.txt";
/// Default visitor load file name.
pub const LOAD_FILE: &str = "visitor_load.txt";
/// Default landmark map file name.
pub const MAP_FILE: &str = "landmark_map_data.txt";

/// Locations of the three input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Personal interest per landmark; its order defines landmark indices.
    pub interest: Utf8PathBuf,
    /// Visitor load per landmark.
    pub load: Utf8PathBuf,
    /// Directed leg records.
    pub map: Utf8PathBuf,
}

impl DataPaths {
    /// The default file names inside `dir`.
    ///
    /// # Examples
    /// ```
    /// use camino::Utf8Path;
    /// use landmark_data::DataPaths;
    ///
    /// let paths = DataPaths::in_dir(Utf8Path::new("data"));
    /// assert_eq!(paths.map.as_str(), "data/landmark_map_data.txt");
    /// ```
    #[must_use]
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            interest: dir.join(INTEREST_FILE),
            load: dir.join(LOAD_FILE),
            map: dir.join(MAP_FILE),
        }
    }

    /// Paths in read order.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        [
            self.interest.as_path(),
            self.load.as_path(),
            self.map.as_path(),
        ]
        .into_iter()
    }
}

/// Read all three files and build the problem, keeping the first `limit`
/// landmarks when given.
///
/// # Errors
/// Returns the first [`DataError`] raised while reading or assembling.
pub fn load_problem(paths: &DataPaths, limit: Option<usize>) -> Result<TourProblem, DataError> {
    let interest = read_interest(&paths.interest)?;
    let load = read_load(&paths.load)?;
    let records = read_map(&paths.map)?;
    log::debug!(
        "read {} interest entries, {} load entries and {} map records",
        interest.len(),
        load.len(),
        records.len()
    );
    let builder = MatrixBuilder::new(interest, load);
    match limit {
        Some(count) => builder.with_limit(count).build(&records),
        None => builder.build(&records),
    }
}
