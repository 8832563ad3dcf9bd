//! Completion markers for downstream watchers.

use std::path::{Path, PathBuf};

/// A file whose existence, not its content, signals that the listing is
/// complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMarker {
    path: PathBuf,
}

impl TriggerMarker {
    /// Always empty.
    pub const CONTENTS: &'static str = "";

    /// `None` for an empty path.
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        (!path.as_os_str().is_empty()).then_some(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &'static str {
        Self::CONTENTS
    }
}
