//! Auracast Hub API library.
//!
//! Stateless handlers for device profiles, sessions and user settings, each
//! taking one gateway event and answering with one gateway response, plus a
//! local Axum server that routes HTTP requests to them.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
