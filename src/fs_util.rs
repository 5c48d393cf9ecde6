//! Locked, atomic file writes shared by config and snapshot saving

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// Sibling path with an extra suffix, e.g. `board.json` -> `board.json.lock`
pub fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Exclusive lock on `<path>.lock`, held until the returned file is dropped.
///
/// The lock lives in a separate file so the target can be replaced by rename.
pub fn lock_exclusive(path: &Path) -> io::Result<File> {
    ensure_parent(path)?;
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(sibling(path, ".lock"))?;
    lock_file.lock_exclusive()?;
    Ok(lock_file)
}

/// Write `contents` to `<path>.tmp`, sync it, then rename over `path`.
///
/// Callers that need exclusion take [`lock_exclusive`] first.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent(path)?;

    let temp_path = sibling(path, ".tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(contents)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sibling_appends_suffix() {
        assert_eq!(
            sibling(Path::new("/tmp/board.json"), ".tmp"),
            PathBuf::from("/tmp/board.json.tmp")
        );
    }

    #[test]
    fn test_write_atomic_replaces_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        std::fs::write(&path, "old contents that are longer").unwrap();
        write_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!sibling(&path, ".tmp").exists());
    }

    #[test]
    fn test_lock_released_on_drop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        drop(lock_exclusive(&path).unwrap());
        let again = lock_exclusive(&path).unwrap();
        assert!(sibling(&path, ".lock").exists());
        drop(again);
    }
}
