//! Filesystem helpers built on `cap-std` and `camino`.

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

use crate::DataError;

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Returns the I/O error reported when opening the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the parent directory of `path` and return it with the file name.
///
/// # Errors
/// Returns an error when `path` has no file name or the parent directory
/// cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether a path exists and is a regular file using capability-based
/// IO.
///
/// # Errors
/// Returns the I/O error raised while opening the parent directory or reading
/// metadata; a missing path surfaces as [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Read a whole file as UTF-8 text.
///
/// # Errors
/// Returns [`DataError::Io`] carrying `path` when the file cannot be opened
/// or is not valid UTF-8.
pub fn read_text(path: &Utf8Path) -> Result<String, DataError> {
    let io_error = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_utf8_file(path).map_err(io_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_error)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_dir(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir")
    }

    #[rstest]
    fn file_checks_distinguish_files_directories_and_missing_paths() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_dir(&dir);
        let file = root.join("weights.txt");
        std::fs::write(&file, "Name\tInterest\n").expect("write file");

        assert!(file_is_file(&file).expect("file metadata"));
        assert!(!file_is_file(&root).expect("dir metadata"));
        for missing in [root.join("absent.txt"), root.join("absent/inner.txt")] {
            let err = file_is_file(&missing).expect_err("missing path");
            assert_eq!(err.kind(), io::ErrorKind::NotFound);
        }
    }

    #[rstest]
    fn read_text_reports_the_path() {
        let dir = TempDir::new().expect("temp dir");
        let missing = utf8_dir(&dir).join("absent.txt");
        let err = read_text(&missing).expect_err("missing file");
        assert!(matches!(err, DataError::Io { ref path, .. } if *path == missing));
    }

    #[rstest]
    fn read_text_returns_contents() {
        let dir = TempDir::new().expect("temp dir");
        let file = utf8_dir(&dir).join("load.txt");
        std::fs::write(&file, "Name\tLoad\nHotel\t0\n").expect("write file");
        assert_eq!(read_text(&file).expect("read"), "Name\tLoad\nHotel\t0\n");
    }
}
