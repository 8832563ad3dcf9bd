//! Core domain layer for dirlist.
//!
//! Pure values with no I/O: what to list, how a listing is ordered and
//! rendered, and what a trigger marker contains. Everything that touches the
//! disk goes through the `Filesystem` port in the application layer.

pub mod error;
pub mod listing;
pub mod request;
pub mod trigger;

pub use error::DomainError;
pub use listing::SubdirectoryListing;
pub use request::ListingRequest;
pub use trigger::TriggerMarker;

/// Domain-level result alias.
pub type DomainResult<T> = Result<T, DomainError>;
