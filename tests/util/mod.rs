#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory tree for walk tests.
///
/// The root is canonicalized at creation so expectations compare cleanly
/// against the walk's canonicalized paths (on macOS the temp dir sits
/// behind a symlink).
pub struct Dir {
    root: PathBuf,
    _temp: TempDir,
}

impl Dir {
    pub fn tmp() -> Dir {
        let temp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(temp.path()).unwrap();
        Dir { root, _temp: temp }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Create an empty file, creating parent directories as needed.
    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"").unwrap();
        path
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

/// Paths relative to `root`, rendered as sorted strings. The root itself
/// renders as `""`.
pub fn relative_sorted(paths: &[PathBuf], root: &Path) -> Vec<String> {
    let mut relative: Vec<String> = paths
        .iter()
        .map(|path| {
            path.strip_prefix(root)
                .unwrap()
                .to_str()
                .unwrap()
                .to_string()
        })
        .collect();
    relative.sort();
    relative
}
