//! HTTP API response DTOs for the Auracast Hub handlers.

use serde::{Deserialize, Serialize};

use crate::domain::BufferRecommendation;

/// Confirmation message body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Error body returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when a session is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedDto {
    pub session_id: String,
}

/// Recommended buffer size for a device model on a platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub model: String,
    pub platform: String,
    pub recommended_buffer_ms: i64,
    pub sample_count: usize,
}

impl From<BufferRecommendation> for RecommendationDto {
    fn from(recommendation: BufferRecommendation) -> Self {
        Self {
            model: recommendation.model.into_string(),
            platform: recommendation.platform.into_string(),
            recommended_buffer_ms: recommendation.recommended_buffer_ms,
            sample_count: recommendation.sample_count,
        }
    }
}
