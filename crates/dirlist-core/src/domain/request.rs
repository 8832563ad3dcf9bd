//! The input to one listing run.

use std::path::{Path, PathBuf};

use super::{DomainError, DomainResult, TriggerMarker};

/// What to scan and where to put the results.
///
/// Invariant: `out_file` is never empty. The target directory may be empty
/// or point nowhere; that simply yields an empty listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    target_dir: PathBuf,
    out_file: PathBuf,
    trigger: Option<TriggerMarker>,
}

impl ListingRequest {
    /// Create a request without a trigger file.
    pub fn new(target_dir: impl Into<PathBuf>, out_file: impl Into<PathBuf>) -> DomainResult<Self> {
        let out_file = out_file.into();
        if out_file.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath { field: "out-file" });
        }

        Ok(Self {
            target_dir: target_dir.into(),
            out_file,
            trigger: None,
        })
    }

    /// Attach a trigger file. An empty path leaves the request without one.
    pub fn with_trigger_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.trigger = TriggerMarker::new(path);
        self
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn out_file(&self) -> &Path {
        &self.out_file
    }

    pub fn trigger(&self) -> Option<&TriggerMarker> {
        self.trigger.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_out_file() {
        let err = ListingRequest::new("data", "").unwrap_err();
        assert_eq!(err, DomainError::EmptyPath { field: "out-file" });
    }

    #[test]
    fn empty_target_is_allowed() {
        let request = ListingRequest::new("", "out.txt").unwrap();
        assert_eq!(request.target_dir(), Path::new(""));
    }

    #[test]
    fn empty_trigger_means_no_trigger() {
        let request = ListingRequest::new("data", "out/list.txt")
            .unwrap()
            .with_trigger_file("");
        assert!(request.trigger().is_none());
    }

    #[test]
    fn trigger_is_kept() {
        let request = ListingRequest::new("data", "out/list.txt")
            .unwrap()
            .with_trigger_file("out/list.done");
        assert_eq!(
            request.trigger().map(TriggerMarker::path),
            Some(Path::new("out/list.done"))
        );
    }
}
