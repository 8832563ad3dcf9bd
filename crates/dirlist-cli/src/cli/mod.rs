//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and which raw arguments are ours.  No business logic lives here.

use std::ffi::OsString;

use clap::{Args, Parser};

pub mod global;
pub mod known_args;
pub use global::GlobalArgs;
pub use known_args::SplitArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "dirlist",
    bin_name = "dirlist",
    version  = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true,
    args_override_self = true,
    infer_long_args = true,
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "List immediate subdirectories, then drop a trigger file",
    long_about = "dirlist writes the sorted immediate subdirectories of a directory \
                  to an output file, one path per line, then creates an empty \
                  trigger file so a downstream watcher knows the listing is ready. \
                  Unrecognised arguments are ignored.",
    after_help = "EXAMPLES:\n\
        \x20 dirlist --directory data/raw --out-file build/subdirs.txt --trigger-file build/subdirs.done\n\
        \x20 dirlist -v --directory . --out-file out.txt --trigger-file out.done --extra-pipeline-flag",
)]
pub struct Cli {
    /// Long-only, so a stray `-V` from the pipeline is ignored instead of
    /// cutting the run short.
    #[arg(long = "version", action = clap::ArgAction::Version, help = "Print version")]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Diagnostic flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to list and where to write it.
    #[command(flatten)]
    pub listing: ListArgs,
}

// ── listing ───────────────────────────────────────────────────────────────────

/// Listing arguments.
///
/// Kept as `OsString` so empty values survive parsing: an empty trigger
/// path means "no trigger", an empty directory lists nothing.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory whose immediate subdirectories are listed.
    #[arg(
        long = "directory",
        value_name = "DIR",
        help = "Directory to scan for subdirectories"
    )]
    pub directory: OsString,

    /// Destination of the newline-separated listing.
    #[arg(
        long = "out-file",
        value_name = "FILE",
        help = "Output file to write subdirectories to"
    )]
    pub out_file: OsString,

    /// Empty marker file written after the listing.
    #[arg(
        long = "trigger-file",
        value_name = "FILE",
        help = "Trigger file to create after processing"
    )]
    pub trigger_file: OsString,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "dirlist",
        "--directory",
        "data",
        "--out-file",
        "out/list.txt",
        "--trigger-file",
        "out/list.done",
    ];

    #[test]
    fn parse_required_flags() {
        let cli = Cli::parse_from(REQUIRED);
        assert_eq!(cli.listing.directory, "data");
        assert_eq!(cli.listing.out_file, "out/list.txt");
        assert_eq!(cli.listing.trigger_file, "out/list.done");
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn inline_values_are_accepted() {
        let cli = Cli::parse_from([
            "dirlist",
            "--directory=data",
            "--out-file=list.txt",
            "--trigger-file=",
        ]);
        assert_eq!(cli.listing.directory, "data");
        assert!(cli.listing.trigger_file.is_empty());
    }

    #[test]
    fn all_listing_flags_are_required() {
        let result = Cli::try_parse_from(["dirlist", "--directory", "data", "--out-file", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_together() {
        let mut args = REQUIRED.to_vec();
        args.extend(["--quiet", "--verbose"]);
        let cli = Cli::parse_from(args);
        assert!(cli.global.quiet);
        assert_eq!(cli.global.verbose, 1);
    }

    #[test]
    fn repeated_flag_keeps_last_value() {
        let mut args = REQUIRED.to_vec();
        args.extend(["--directory", "other"]);
        let cli = Cli::parse_from(args);
        assert_eq!(cli.listing.directory, "other");
    }

    #[test]
    fn unambiguous_long_prefixes() {
        let cli = Cli::parse_from(["dirlist", "--dir", "d", "--out", "o", "--trig", "t"]);
        assert_eq!(cli.listing.directory, "d");
        assert_eq!(cli.listing.out_file, "o");
        assert_eq!(cli.listing.trigger_file, "t");
    }

    #[test]
    fn short_version_flag_is_not_defined() {
        let mut args = REQUIRED.to_vec();
        args.push("-V");
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn long_version_flag_exits_early() {
        let err = Cli::try_parse_from(["dirlist", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
