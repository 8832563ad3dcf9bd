//! Infrastructure adapters for dirlist.
//!
//! This crate implements the ports defined in `dirlist-core::application::ports`.
//! It contains all I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
