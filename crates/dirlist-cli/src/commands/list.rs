//! Implementation of the listing step.

use dirlist_adapters::LocalFilesystem;
use dirlist_core::{
    application::{ListingReport, ListingService},
    domain::ListingRequest,
    error::ListerError,
};
use tracing::info;

use crate::{cli::ListArgs, error::CliResult};

/// Write the subdirectory listing and trigger file described by `args`.
pub fn execute(args: ListArgs) -> CliResult<ListingReport> {
    let request = ListingRequest::new(args.directory, args.out_file)
        .map_err(ListerError::from)?
        .with_trigger_file(args.trigger_file);

    let service = ListingService::new(Box::new(LocalFilesystem::new()));
    let report = service.run(&request)?;

    info!(
        out_file = %report.out_file.display(),
        subdirectories = report.subdirectories,
        "Listing written"
    );
    Ok(report)
}
