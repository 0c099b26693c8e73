//! Logging Infrastructure
//!
//! Structured logging setup for the reservation engine. `RUST_LOG` takes
//! precedence over the configured level.

use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Initialize the logger at `info`
pub fn init_logger() -> bool {
    init_logger_with_level("info")
}

/// Initialize the logger at the configured `LOG_LEVEL`
pub fn init_logger_from_config(config: &Config) -> bool {
    init_logger_with_level(&config.log_level)
}

/// Initialize the logger with a default level
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logger_with_level(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let config = Config::from_lookup(|key| (key == "LOG_LEVEL").then(|| "debug".to_string()));
        init_logger_from_config(&config);
        assert!(!init_logger());
        assert!(!init_logger_with_level("not a level"));
    }
}
