//! Data transfer objects exchanged with the routing layer.

pub mod gateway;
pub mod http;
