//! Activity logging
//!
//! `tracing` events go to stderr through a `tracing-subscriber` formatter.
//! The filter comes from `RUST_LOG` when set, otherwise from the `-v` count,
//! otherwise from `[log] level`.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

static INIT_LOGGING: Once = Once::new();

/// Filter directive for a `-v` count, or `None` to defer to config
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

fn filter_for(verbose: u8, config: &LogConfig) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    let directive = verbosity_directive(verbose).unwrap_or(config.level.as_str());
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: u8, config: &LogConfig) {
    let filter = filter_for(verbose, config);
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Initialize logging for tests.
///
/// Uses `level` when given, `RUST_LOG` otherwise; silent when neither is set.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
