//! Diagnostic logging to stderr.
//!
//! `HATCH_LOG` takes an env-filter directive (e.g. `hatchling_generator=debug`)
//! and wins over `-v`. Without it, each `-v` raises the level one step from
//! `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_VAR: &str = "HATCH_LOG";

/// Default filter directive for a `-v` count.
pub fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// If one is already installed it is kept, and the refusal is logged to it.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level(verbose)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
    {
        tracing::debug!(error = %e, "logging already initialized");
    }
}
