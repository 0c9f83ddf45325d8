//! Tracing setup. All output goes to stderr so stdout stays free for
//! command output such as event lines.

use tracing_subscriber::filter::{EnvFilter, ParseError};

use crate::config::LoggingConfig;

const FALLBACK_LEVEL: &str = "info";

/// Filter built from `config.level` alone, ignoring `RUST_LOG`.
pub fn config_filter(config: &LoggingConfig) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(&config.level)
}

/// Install the global subscriber. `RUST_LOG` overrides `config.level`;
/// an unparsable level falls back to `info` with a warning.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let mut rejected = None;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config_filter(config).unwrap_or_else(|e| {
            rejected = Some(e);
            EnvFilter::new(FALLBACK_LEVEL)
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.with_target(true).compact().try_init().is_ok()
    };

    if let Some(e) = rejected {
        tracing::warn!(level = %config.level, error = %e, "Invalid log level, using {FALLBACK_LEVEL}");
    }
    installed
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() -> bool {
    init_logging(&LoggingConfig::default())
}
