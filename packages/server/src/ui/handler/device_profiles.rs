//! Device profile handler: submissions and buffer size recommendations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::{Model, Platform, TableRepository},
    infrastructure::dto::{
        gateway::{GatewayEvent, GatewayResponse},
        http::{MessageDto, RecommendationDto},
    },
    ui::error::ApiError,
    usecase::{RecommendBufferSizeUseCase, SubmitDeviceProfileUseCase},
};

use super::GatewayHandler;

/// Handler backed by the device profile table
pub struct DeviceProfileHandler {
    repository: Arc<dyn TableRepository>,
}

impl DeviceProfileHandler {
    pub fn new(repository: Arc<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// POST: store a submitted profile
    async fn submit(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        let body = event.json_body()?;
        let device_id = SubmitDeviceProfileUseCase::new(self.repository.clone())
            .execute(body)
            .await?;

        tracing::info!("Device profile '{}' submitted", device_id);
        Ok(GatewayResponse::json(
            201,
            &MessageDto::new("Device profile submitted"),
        ))
    }

    /// GET .../recommended?model=&platform=
    async fn recommend(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        // Convert String -> Domain Models
        let model = Model::new(event.query_parameter("model").unwrap_or_default().to_string())?;
        let platform =
            Platform::new(event.query_parameter("platform").unwrap_or_default().to_string())?;

        let recommendation = RecommendBufferSizeUseCase::new(self.repository.clone())
            .execute(model, platform)
            .await?;

        Ok(GatewayResponse::json(
            200,
            &RecommendationDto::from(recommendation),
        ))
    }
}

#[async_trait]
impl GatewayHandler for DeviceProfileHandler {
    async fn dispatch(&self, event: &GatewayEvent) -> Result<GatewayResponse, ApiError> {
        match event.http_method.as_str() {
            "POST" => self.submit(event).await,
            "GET" if event.resource.contains("recommended") => self.recommend(event).await,
            _ => Err(ApiError::MethodNotAllowed),
        }
    }
}
