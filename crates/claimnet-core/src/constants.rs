/// claimnet version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "CLAIMNET_LOG";

/// Filter used when `CLAIMNET_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "claimnet=info";

/// Maximum number of row rejections rendered into an error message.
/// The full list is always kept on the error value itself.
pub const MAX_REJECTIONS_DISPLAYED: usize = 5;
