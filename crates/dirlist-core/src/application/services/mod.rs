//! Application services - orchestrate use cases.

pub mod listing_service;

pub use listing_service::{ListingReport, ListingService};
