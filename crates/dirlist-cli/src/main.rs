//! # dirlist
//!
//! Pipeline step: list a directory's immediate subdirectories into a file,
//! then create an empty trigger file.
//!
//! ## Startup sequence
//!
//! 1. Split raw arguments into ours and the pipeline's (the latter are ignored).
//! 2. Parse our arguments (clap handles `--help` / `--version` early-exit).
//! 3. Load configuration (file + env + defaults).
//! 4. Initialise the tracing subscriber (logging).
//! 5. Run the listing.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Filesystem / internal error      |
//! |  2   | Usage error                      |
//! |  4   | Configuration error              |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, SplitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    // Load .env before config and tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Split arguments ────────────────────────────────────────────────
    let SplitArgs { known, ignored } = SplitArgs::from_command(Cli::command(), std::env::args_os());

    // ── 2. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse_from(known) {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, cli.global.verbose > 0, cli.global.no_color),
    };
    let no_color = cli.global.no_color || config.output.no_color;
    let verbose = cli.global.verbose > 0;

    // ── 4. Initialise tracing ─────────────────────────────────────────────
    let _log_guard = match init_logging(&cli.global, &config.log, no_color) {
        Ok(guard) => guard,
        Err(e) => return handle_error(e, verbose, no_color),
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color,
        "CLI started"
    );
    if !ignored.is_empty() {
        debug!(?ignored, "Ignoring unrecognised arguments");
    }

    // ── 5. Run + 6. Error handling ────────────────────────────────────────
    match run(cli) {
        Ok(()) => {
            info!("dirlist completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    commands::list::execute(cli.listing).map(|_| ())
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // stderr, so the message appears even when stdout is redirected.
    let msg = if !no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
