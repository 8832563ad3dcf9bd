//! Application layer for dirlist.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ListingService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Ordering and rendering rules live in `crate::domain`; this layer only
//! decides which filesystem calls happen and in what order.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ListingReport, ListingService};

pub use ports::Filesystem;

pub use error::ApplicationError;
