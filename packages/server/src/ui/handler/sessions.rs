//! Session handler: create, partially update and delete sessions.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::{SessionId, TableRepository},
    infrastructure::dto::{
        gateway::{GatewayEvent, GatewayResponse},
        http::{MessageDto, SessionCreatedDto},
    },
    ui::error::ApiError,
    usecase::{CreateSessionUseCase, DeleteSessionUseCase, UpdateSessionUseCase},
};

use super::GatewayHandler;

/// Handler backed by the session table
pub struct SessionHandler {
    repository: Arc<dyn TableRepository>,
}

impl SessionHandler {
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    fn session_id(event: &GatewayEvent) -> Result<SessionId, ApiError> {
        let raw = event.path_parameter("sessionId").unwrap_or_default();
        Ok(SessionId::new(raw.to_string())?)
    }

    async fn create(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        let body = event.json_body()?;
        let session_id = CreateSessionUseCase::new(self.repository.clone())
            .execute(body)
            .await?;

        tracing::info!("Session '{}' created", session_id);
        Ok(GatewayResponse::json(
            201,
            &SessionCreatedDto {
                session_id: session_id.into_string(),
            },
        ))
    }

    async fn update(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        let session_id = Self::session_id(event)?;
        let body = event.json_body()?;
        UpdateSessionUseCase::new(self.repository.clone())
            .execute(session_id, body)
            .await?;

        Ok(GatewayResponse::json(200, &MessageDto::new("Session updated")))
    }

    async fn delete(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        let session_id = Self::session_id(event)?;
        DeleteSessionUseCase::new(self.repository.clone())
            .execute(session_id)
            .await?;

        Ok(GatewayResponse::empty(204))
    }
}

#[async_trait]
impl GatewayHandler for SessionHandler {
    async fn dispatch(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        match event.http_method.as_str() {
            "POST" => self.create(event).await,
            "PUT" => self.update(event).await,
            "DELETE" => self.delete(event).await,
            _ => Err(ApiError::MethodNotAllowed),
        }
    }
}
