//! Structured logging setup

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log the time elapsed since `start` at trace level
///
/// ```rust,ignore
/// let start = Instant::now();
/// let counts = count_terms(&documents);
/// trace_time!(start, "tokenize", documents = documents.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV_VAR: &str = "BOOKMATCH_LOG";

/// Filter directive for the CLI flags
///
/// A bare level applies to both bookmatch crates; anything containing `=` is
/// used as a full directive.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("bookmatch={0},bookmatch_core={0}", level),
        (true, None) => "bookmatch=debug,bookmatch_core=debug".to_string(),
        (false, None) => "bookmatch=warn,bookmatch_core=warn".to_string(),
    }
}

/// Install the global subscriber; logs go to stderr
///
/// `RUST_LOG` wins over `BOOKMATCH_LOG`, which wins over the flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
