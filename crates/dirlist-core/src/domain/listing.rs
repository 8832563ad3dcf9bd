//! Sorted subdirectory listings and their on-disk text form.

use std::fmt;
use std::path::PathBuf;

use super::{DomainError, DomainResult};

/// The immediate subdirectories of a target, in output order.
///
/// Entries are ordered byte-wise on their full path string, so `D/A` comes
/// before `D/a` and no locale rules apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubdirectoryListing {
    entries: Vec<String>,
}

impl SubdirectoryListing {
    /// A listing with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a listing from already-joined subdirectory paths.
    ///
    /// Fails if any path is not valid UTF-8, since the listing file is text.
    pub fn from_paths<I>(paths: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut entries = paths
            .into_iter()
            .map(|path| {
                path.into_os_string()
                    .into_string()
                    .map_err(|raw| DomainError::NonUtf8Path {
                        path: PathBuf::from(raw),
                    })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        // `str` ordering is byte-wise.
        entries.sort_unstable();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newline-joined entries with no trailing newline; empty when there
    /// are no entries.
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

impl fmt::Display for SubdirectoryListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
