//! Structured logging setup
//!
//! Initialization and configuration for structured logging using the
//! `tracing` ecosystem: console output by default, optional JSON output,
//! `RUST_LOG`-style filtering, and a once-only guard so repeated
//! initialization is ignored.
//!
//! # Example
//!
//! ```no_run
//! use autoinclude::util::logging;
//!
//! logging::init_from_env();
//!
//! use tracing::{debug, info};
//! info!("Scan starting");
//! debug!(root = "/repo", "Scanning");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format (for structured logging in production)
    pub use_json: bool,

    /// Include the module target (e.g., autoinclude::scanner) in logs
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with the specified level
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, case-insensitive.
///
/// Falls back to `Level::INFO` for unrecognized input.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the logging system with the provided configuration.
///
/// Can only be called once; subsequent calls are ignored. Output goes to
/// stderr so machine-readable scan output on stdout stays clean.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive(format!("autoinclude={}", config.level).parse().unwrap());

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

/// Initializes logging from environment variables.
///
/// `AUTOINCLUDE_LOG_LEVEL` selects the level, `AUTOINCLUDE_LOG_JSON=1`
/// switches to JSON output; `RUST_LOG` still applies for fine-grained
/// filtering.
pub fn init_from_env() {
    let level = env::var("AUTOINCLUDE_LOG_LEVEL")
        .map(|s| parse_level(&s))
        .unwrap_or(Level::INFO);

    let use_json = env::var("AUTOINCLUDE_LOG_JSON")
        .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    init_logging(LoggingConfig {
        level,
        use_json,
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("Warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("bogus"), Level::INFO);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
    }
}
