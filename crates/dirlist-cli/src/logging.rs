//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `dirlist-core`
//! and `dirlist-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level             |
//! |----------|--------------------------|
//! | (none)   | `log.level`, else WARN   |
//! | `-v`     | INFO                     |
//! | `-vv`    | DEBUG                    |
//! | `-vvv`   | TRACE                    |
//! | `--quiet`| ERROR                    |
//!
//! `RUST_LOG` overrides all of the above if set.  Events always go to
//! stderr so stdout stays clean for pipelines.

use std::io::IsTerminal as _;
use std::path::Path;

use tracing::Subscriber;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

use crate::{
    cli::GlobalArgs,
    config::{LogConfig, LogFormat},
    error::{CliError, CliResult},
};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.  When a log
/// file is configured the returned guard must be held until exit so the
/// background writer flushes.
pub fn init_logging(
    args: &GlobalArgs,
    config: &LogConfig,
    no_color: bool,
) -> CliResult<Option<WorkerGuard>> {
    let level = derive_level(args, config.level.as_deref());

    // RUST_LOG wins; otherwise every crate in the workspace gets the same level.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!(
            "dirlist={level},dirlist_core={level},dirlist_adapters={level}"
        ))
        .map_err(|e| CliError::ConfigError {
            message: format!("Invalid log level '{level}'"),
            source: Some(Box::new(e)),
        })?,
    };

    let use_ansi = !no_color && std::io::stderr().is_terminal();

    let (file_sink, guard) = match &config.file {
        Some(path) => {
            let (layer, guard) = file_layer(path)?;
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer(config.format, use_ansi))
        .with(file_sink)
        .try_init()
        .map_err(|e| CliError::LoggingError {
            message: "Failed to initialise tracing".into(),
            source: Some(Box::new(e)),
        })?;

    Ok(guard)
}

fn stderr_layer<S>(format: LogFormat, ansi: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Plain-text sink appending to `path`, written from a background thread.
fn file_layer<S>(path: &Path) -> CliResult<(BoxedLayer<S>, WorkerGuard)>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let file_name = path.file_name().ok_or_else(|| CliError::ConfigError {
        message: format!("log.file has no file name: {}", path.display()),
        source: None,
    })?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .map_err(|e| CliError::LoggingError {
            message: format!("Failed to open log file {}", path.display()),
            source: Some(Box::new(e)),
        })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .boxed();

    Ok((layer, guard))
}

/// Translate the verbosity counter + quiet flag to a level string.
///
/// Flags beat the configured level, which beats the WARN default.
fn derive_level<'a>(args: &GlobalArgs, configured: Option<&'a str>) -> &'a str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => configured.unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalArgs;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true), None), "error");
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(&args_with(0, false), None), "warn");
    }

    #[test]
    fn level_from_config() {
        assert_eq!(derive_level(&args_with(0, false), Some("debug")), "debug");
    }

    #[test]
    fn flags_beat_config() {
        assert_eq!(derive_level(&args_with(1, false), Some("error")), "info");
        assert_eq!(derive_level(&args_with(0, true), Some("trace")), "error");
    }

    #[test]
    fn level_verbose_two() {
        assert_eq!(derive_level(&args_with(2, false), None), "debug");
    }

    #[test]
    fn level_verbose_three_plus() {
        assert_eq!(derive_level(&args_with(3, false), None), "trace");
        assert_eq!(derive_level(&args_with(10, false), None), "trace");
    }
}
