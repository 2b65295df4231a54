//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use claimnet_core::config::ObservabilityConfig;
use claimnet_core::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the claimnet tracing/logging system.
///
/// Reads the `CLAIMNET_LOG` environment variable for per-crate log levels.
/// Format: `CLAIMNET_LOG=claimnet_graph=debug,claimnet_core=warn`
///
/// Falls back to `claimnet=info` if `CLAIMNET_LOG` is not set or is invalid.
/// Only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, false);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize tracing from the `[observability]` config section.
/// `CLAIMNET_LOG` still takes precedence over `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    install(build_filter(config), config.json);
}

/// The filter `init_from_config` would install.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(format!("claimnet={}", config.log_level)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // Another subscriber may already be installed by the host.
        if let Err(err) = result {
            tracing::debug!(%err, "tracing subscriber not installed");
        }
    });
}
