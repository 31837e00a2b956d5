//! # Structured Logging Module
//!
//! Environment-aware structured logging: human-readable console output in
//! development, JSON in production for log aggregation.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// The filter comes from `RUST_LOG` when set, otherwise from the default
/// level for the detected environment.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| default_log_level(&environment).to_string());

        // Use try_init to avoid panic if a global subscriber already exists
        // (e.g. when called from tests).
        let initialized = if environment == "production" {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .json()
                        .with_filter(EnvFilter::new(&filter)),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_filter(EnvFilter::new(&filter)),
                )
                .try_init()
        };

        if initialized.is_ok() {
            tracing::info!(
                environment = %environment,
                filter = %filter,
                "Structured logging initialized"
            );
        }
    });
}

/// Get current environment from environment variables.
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Get default log level based on environment.
fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        "test" | "development" => "debug",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detection() {
        std::env::set_var("APP_ENV", "test_override");
        let env = get_environment();
        assert_eq!(env, "test_override");
        std::env::remove_var("APP_ENV");
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(default_log_level("test"), "debug");
        assert_eq!(default_log_level("development"), "debug");
        assert_eq!(default_log_level("production"), "info");
        assert_eq!(default_log_level("unknown"), "debug");
    }
}
