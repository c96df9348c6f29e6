//! Test helpers for writing landmark data files into temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use landmark_data::{INTEREST_FILE, LOAD_FILE, MAP_FILE};
use std::fs;
use tempfile::TempDir;

pub(super) const EXAMPLE_INTEREST: &str =
    "Landmark\tPersonal Interest\nHotel\t1\nMuseum\t1\nHarbour\t1\n";
pub(super) const EXAMPLE_LOAD: &str = "Landmark\tVisitor Load\nHotel\t0\nMuseum\t0\nHarbour\t0\n";
pub(super) const EXAMPLE_MAP: &str = "From\tTo\tBase Score\tTravel Time\n\
    Hotel\tMuseum\t5\t7\n\
    Hotel\tHarbour\t1\t3\n\
    Museum\tHotel\t3\t5\n\
    Museum\tHarbour\t4\t9\n\
    Harbour\tHotel\t2\t4\n\
    Harbour\tMuseum\t6\t8\n";

/// Console output for the example files.
pub(super) const EXAMPLE_TEXT: &str = "Maximized total attractiveness score: 11.0\n\
    The visited landmarks:\n\
    1-Hotel\n\
    2-Museum\n\
    3-Harbour\n\
    4-Hotel\n\
    Total Travel Time: 20.0\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write data file");
}

#[derive(Debug)]
pub(super) struct DataDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn with_example() -> Self {
        let data = Self::new();
        data.write_example();
        data
    }

    pub(super) fn write_example(&self) {
        write_utf8(&self.root.join(INTEREST_FILE), EXAMPLE_INTEREST.as_bytes());
        write_utf8(&self.root.join(LOAD_FILE), EXAMPLE_LOAD.as_bytes());
        write_utf8(&self.root.join(MAP_FILE), EXAMPLE_MAP.as_bytes());
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}
