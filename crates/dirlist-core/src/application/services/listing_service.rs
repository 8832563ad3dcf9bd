//! Listing Service - the whole pipeline step.
//!
//! 1. Make sure the output (and trigger) parent directories exist
//! 2. Collect and sort the target's immediate subdirectories
//! 3. Write the listing
//! 4. Write the empty trigger file
//!
//! The trigger is written last so a watcher never sees it before the
//! listing is complete.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ListingRequest, SubdirectoryListing},
    error::ListerResult,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingReport {
    pub out_file: PathBuf,
    pub trigger_file: Option<PathBuf>,
    pub subdirectories: usize,
}

/// Main listing service.
pub struct ListingService {
    filesystem: Box<dyn Filesystem>,
}

impl ListingService {
    /// Create a new listing service on top of a filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write the sorted subdirectory listing, then the trigger file.
    #[instrument(
        skip_all,
        fields(
            target = %request.target_dir().display(),
            out_file = %request.out_file().display()
        )
    )]
    pub fn run(&self, request: &ListingRequest) -> ListerResult<ListingReport> {
        self.ensure_parent(request.out_file())?;
        if let Some(trigger) = request.trigger() {
            self.ensure_parent(trigger.path())?;
        }

        let listing = self.scan(request.target_dir())?;
        info!(subdirectories = listing.len(), "Writing listing");
        self.filesystem
            .write_file(request.out_file(), &listing.render())?;

        if let Some(trigger) = request.trigger() {
            debug!(trigger = %trigger.path().display(), "Writing trigger file");
            self.filesystem
                .write_file(trigger.path(), trigger.contents())?;
        }

        Ok(ListingReport {
            out_file: request.out_file().to_path_buf(),
            trigger_file: request.trigger().map(|t| t.path().to_path_buf()),
            subdirectories: listing.len(),
        })
    }

    /// Collect the immediate subdirectories of `target`.
    ///
    /// A missing target, or one that is not a directory, yields an empty
    /// listing rather than an error.
    pub fn scan(&self, target: &Path) -> ListerResult<SubdirectoryListing> {
        if !self.filesystem.is_dir(target) {
            debug!(target = %target.display(), "Target is not a directory; listing is empty");
            return Ok(SubdirectoryListing::empty());
        }

        let children = self.filesystem.list_children(target)?;
        debug!(children = children.len(), "Enumerated target");

        let subdirs = children
            .into_iter()
            .filter(|child| self.filesystem.is_dir(child));

        Ok(SubdirectoryListing::from_paths(subdirs)?)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// A bare file name has an empty parent, which needs nothing created.
    fn ensure_parent(&self, path: &Path) -> ListerResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.filesystem.create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}
