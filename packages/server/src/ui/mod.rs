//! HTTP-facing layer: gateway handlers and the local Axum server.

pub mod error;
pub mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::build_router;
pub use runner::run;
