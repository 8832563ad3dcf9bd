//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::error::ListerResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dirlist_adapters::filesystem::LocalFilesystem` (production)
/// - `dirlist_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `is_dir` follows symlinks and never fails: anything that cannot be
///   inspected is "not a directory"
/// - `list_children` is one level deep and returns `path` joined with each
///   child name, in no particular order
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ListerResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> ListerResult<()>;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the direct children of a directory.
    fn list_children(&self, path: &Path) -> ListerResult<Vec<PathBuf>>;
}
