//! User settings handler: whole-record reads and writes keyed by `userId`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::{TableRepository, UserId},
    infrastructure::dto::gateway::{GatewayEvent, GatewayResponse},
    ui::error::ApiError,
    usecase::{GetSettingsUseCase, PutSettingsUseCase},
};

use super::GatewayHandler;

pub struct SettingsHandler {
    repository: Arc<dyn TableRepository>,
}

impl SettingsHandler {
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    fn user_id(event: &GatewayEvent) -> Result<UserId, ApiError> {
        let raw = event.path_parameter("userId").unwrap_or_default();
        Ok(UserId::new(raw.to_string())?)
    }
}

#[async_trait]
impl GatewayHandler for SettingsHandler {
    async fn dispatch(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        let method = event.http_method.as_str();
        if method != "GET" && method != "PUT" {
            return Err(ApiError::MethodNotAllowed);
        }

        let user_id = Self::user_id(event)?;
        let record = if method == "GET" {
            GetSettingsUseCase::new(self.repository.clone())
                .execute(user_id)
                .await?
        } else {
            let body = event.json_body()?;
            PutSettingsUseCase::new(self.repository.clone())
                .execute(user_id, body)
                .await?
        };

        Ok(GatewayResponse::json(200, &record))
    }
}
