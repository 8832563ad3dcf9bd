//! dirlist Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `dirlist`
//! pipeline step: list the immediate subdirectories of a target directory,
//! write them to an output file, then drop an empty trigger file.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dirlist-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ListingService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dirlist-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dirlist_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> ListerResult<()> {
//! let request = ListingRequest::new("data/raw", "out/subdirs.txt")?
//!     .with_trigger_file("out/subdirs.done");
//!
//! let service = ListingService::new(filesystem);
//! let report = service.run(&request)?;
//! println!("{} subdirectories", report.subdirectories);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ListingReport, ListingService,
        ports::Filesystem,
    };
    pub use crate::domain::{ListingRequest, SubdirectoryListing, TriggerMarker};
    pub use crate::error::{ListerError, ListerResult};
}
