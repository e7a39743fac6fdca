//! Removal of previously generated checks.

use crate::{Error, Path};
use walkdir::WalkDir;

/// Recursively removes every file beneath `dir` whose name is not `reserved`.
///
/// Directories are descended into but never removed, and symlinks are not
/// followed, a link is removed like any other file. The first error aborts
/// the walk, files removed up to that point stay removed.
///
/// Returns the number of files that were removed.
pub fn clean_dir(dir: &Path, reserved: &str) -> Result<usize, Error> {
    let mut removed = 0;

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| Error::WalkDir {
            dir: dir.to_owned(),
            source,
        })?;

        if entry.file_type().is_dir() || entry.file_name() == reserved {
            continue;
        }

        std::fs::remove_file(entry.path()).map_err(|source| Error::RemoveFile {
            path: entry.path().to_owned(),
            source,
        })?;

        log::debug!("removed '{}'", entry.path().display());
        removed += 1;
    }

    Ok(removed)
}
