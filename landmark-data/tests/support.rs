// Shared helpers for writing landmark data files into temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Interest table for the Hotel, Museum and Harbour example.
pub const EXAMPLE_INTEREST: &str = "Landmark\tPersonal Interest\nHotel\t1\nMuseum\t1\nHarbour\t1\n";
/// Load table leaving every base score undiscounted.
pub const EXAMPLE_LOAD: &str = "Landmark\tVisitor Load\nHotel\t0\nMuseum\t0\nHarbour\t0\n";
/// Map whose attractiveness is `[[0,5,1],[3,0,4],[2,6,0]]` and travel times
/// `[[0,7,3],[5,0,9],[4,8,0]]`.
pub const EXAMPLE_MAP: &str = "From\tTo\tBase Score\tTravel Time\n\
    Hotel\tMuseum\t5\t7\n\
    Hotel\tHarbour\t1\t3\n\
    Museum\tHotel\t3\t5\n\
    Museum\tHarbour\t4\t9\n\
    Harbour\tHotel\t2\t4\n\
    Harbour\tMuseum\t6\t8\n";

/// A temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub struct DataDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    /// Create an empty directory.
    #[expect(clippy::expect_used, reason = "test fixtures fail fast")]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir");
        Self { _dir: dir, root }
    }

    /// Directory containing the example interest, load and map files under
    /// their default names.
    pub fn with_example() -> Self {
        let dir = Self::new();
        dir.write("personal_interest.txt", EXAMPLE_INTEREST);
        dir.write("visitor_load.txt", EXAMPLE_LOAD);
        dir.write("landmark_map_data.txt", EXAMPLE_MAP);
        dir
    }

    /// Root of the directory.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` and return its path.
    #[expect(clippy::expect_used, reason = "test fixtures fail fast")]
    pub fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("write data file");
        path
    }
}
