//! Logging setup shared by every binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a binary.
///
/// Cargo binary names use hyphens while tracing targets use the crate's
/// underscore form, so `auracast-server` becomes `auracast_server=<level>`.
pub fn default_directive(bin_name: &str, level: &str) -> String {
    format!("{}={},tower_http={}", bin_name.replace('-', "_"), level, level)
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default directive when set.
///
/// # Arguments
///
/// * `bin_name` - Binary name, usually `env!("CARGO_BIN_NAME")`
/// * `level` - Default level for the binary's own targets (e.g. "debug")
pub fn setup_logger(bin_name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
