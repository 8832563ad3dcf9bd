//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use dirlist_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ListerError, ListerResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ListerResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ListerResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, path: &Path) -> ListerResult<Vec<PathBuf>> {
        // Depth 1 only; entry paths are `path` joined with the child name.
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .map(|entry| {
                let entry = entry.map_err(|e| map_walk_error(path, e))?;
                trace!(child = %entry.path().display(), "Found child");
                Ok(entry.into_path())
            })
            .collect()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ListerError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> ListerError {
    let path = e.path().unwrap_or(root).to_path_buf();
    ApplicationError::FilesystemError {
        path,
        operation: "read directory",
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn lists_files_and_directories_one_level_deep() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/nested")).unwrap();
        fs::write(temp.path().join("file.txt"), "x").unwrap();

        let mut children = LocalFilesystem::new().list_children(temp.path()).unwrap();
        children.sort();

        assert_eq!(
            children,
            vec![temp.path().join("a"), temp.path().join("file.txt")]
        );
    }

    #[test]
    fn list_children_of_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = LocalFilesystem::new().list_children(&missing).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("read directory"));
        assert!(message.contains(&missing.display().to_string()));
    }

    #[test]
    fn is_dir_is_false_for_missing_paths() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.is_dir(temp.path()));
        assert!(!fs.is_dir(&temp.path().join("missing")));
        assert!(!fs.is_dir(Path::new("")));
    }

    #[test]
    fn write_file_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "long previous content").unwrap();
        fs.write_file(&path, "").unwrap();

        assert_eq!(std::fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn create_dir_all_fails_through_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = LocalFilesystem::new()
            .create_dir_all(&blocker.join("sub"))
            .unwrap_err();

        assert!(err.to_string().contains("create directory"));
    }
}
