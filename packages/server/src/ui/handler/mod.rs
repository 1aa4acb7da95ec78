//! Handlers, one per backing table.
//!
//! Each handler turns a [`GatewayEvent`] into a [`GatewayResponse`]:
//! validate, read or write its single table, format the response.

pub mod device_profiles;
pub mod http;
pub mod sessions;
pub mod settings;

use async_trait::async_trait;

use crate::infrastructure::dto::gateway::{GatewayEvent, GatewayResponse};

use super::error::ApiError;

pub use device_profiles::DeviceProfileHandler;
pub use http::health_check;
pub use sessions::SessionHandler;
pub use settings::SettingsHandler;

/// A stateless request handler invoked once per request
#[async_trait]
pub trait GatewayHandler: Send + Sync {
    /// Route the event to one operation.
    async fn dispatch(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError>;

    /// Invoke the handler. Every failure becomes an error response.
    async fn handle(&self, event: &GatewayEvent) -> GatewayResponse {
        match self.dispatch(event).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        }
    }
}
