//! File removal helpers

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::error::{CleanError, Result};

/// Remove a file, symlink or directory tree. A path that is already gone is fine.
pub fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(CleanError::Removal {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    removed.map_err(|source| CleanError::Removal {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove every given path, carrying on past failures.
///
/// Returns the first failure once all paths have been attempted.
pub fn remove_all<I>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut first_failure = None;

    for path in paths {
        if let Err(e) = remove_path(&path) {
            tracing::debug!("{}", e);
            first_failure.get_or_insert(e);
        }
    }

    first_failure.map_or(Ok(()), Err)
}

/// Empty a directory while keeping the directory itself.
pub fn remove_contents(dir: &Path) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(CleanError::Removal {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    remove_all(entries.flatten().map(|entry| entry.path()))
}

/// Files under `dir` with the given extension last modified before `cutoff`.
pub fn stale_files(dir: &Path, extension: &str, cutoff: DateTime<Utc>) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
        .filter(|e| {
            e.metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .is_some_and(|modified| DateTime::<Utc>::from(modified) < cutoff)
        })
        .map(|e| e.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_remove_contents_keeps_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("Trash");
        fs::create_dir_all(dir.join("folder/inner")).unwrap();
        let mut file = File::create(dir.join("note.txt")).unwrap();
        writeln!(file, "test content").unwrap();

        remove_contents(&dir).unwrap();

        assert!(dir.exists());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(remove_path(&missing).is_ok());
        assert!(remove_contents(&missing).is_ok());
    }

    #[test]
    fn test_remove_all_mixed_entries() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("caches");
        let file = temp_dir.path().join("a.log");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(&file, b"log").unwrap();

        remove_all(vec![dir.clone(), file.clone()]).unwrap();

        assert!(!dir.exists());
        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_survives() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("precious");
        let link = temp_dir.path().join("link");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), b"keep").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        remove_path(&link).unwrap();

        assert!(!link.exists());
        assert!(target.join("keep.txt").exists());
    }

    #[test]
    fn test_stale_files_by_extension_and_age() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("App")).unwrap();
        fs::write(temp_dir.path().join("App/old.log"), b"old").unwrap();
        fs::write(temp_dir.path().join("App/keep.txt"), b"txt").unwrap();

        let future = Utc::now() + Duration::days(1);
        let stale = stale_files(temp_dir.path(), "log", future);
        assert_eq!(stale, vec![temp_dir.path().join("App/old.log")]);

        let month_ago = Utc::now() - Duration::days(30);
        assert!(stale_files(temp_dir.path(), "log", month_ago).is_empty());
    }
}
