//! Auracast Hub API server.
//!
//! Serves the device profile, session and settings handlers over HTTP.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin auracast-server -- --port 8080
//! ```

use auracast_server::ServerConfig;
use auracast_shared::logger::setup_logger;
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = auracast_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
