#![allow(dead_code)]

use checkgen::{Path, PathBuf};

/// A scratch directory that is removed when dropped
pub struct Scratch {
    _tmp: tempfile::TempDir,
    pub root: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let root = PathBuf::from_path_buf(tmp.path().to_owned()).expect("non-utf8 temp dir");

        Self { _tmp: tmp, root }
    }

    /// Writes `contents` to `rel`, creating parent directories as needed
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.root.join(rel)).unwrap()
    }
}

/// Every file and directory beneath `dir`, relative to it and sorted,
/// directories are suffixed with `/`
pub fn list(dir: &Path) -> Vec<String> {
    let mut entries: Vec<_> = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let rel = entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .to_str()
                .unwrap()
                .replace('\\', "/");

            if entry.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect();

    entries.sort();
    entries
}
