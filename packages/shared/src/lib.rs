//! Shared utilities for Auracast Hub binaries.

pub mod logger;
pub mod time;
