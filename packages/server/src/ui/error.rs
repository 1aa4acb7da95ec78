//! Handler-level error taxonomy and its mapping to HTTP statuses.

use thiserror::Error;

use crate::{
    domain::{EntityError, ValueObjectError},
    infrastructure::dto::{gateway::GatewayResponse, http::ErrorDto},
    usecase::UseCaseError,
};

/// Errors surfaced to the caller of a handler
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or invalid required input (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced entity is absent (404)
    #[error("{0}")]
    NotFound(String),

    /// Unsupported verb for the route (405)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Any other failure, exposed with its description (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed => 405,
            Self::Internal(_) => 500,
        }
    }

    /// Convert to a `{"error": ...}` response, logging at a level matching the status.
    pub fn into_response(self) -> GatewayResponse {
        match &self {
            Self::Internal(message) => tracing::error!("Error: {}", message),
            other => tracing::warn!("Request rejected ({}): {}", other.status_code(), other),
        }
        GatewayResponse::json(
            self.status_code(),
            &ErrorDto {
                error: self.to_string(),
            },
        )
    }
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            // stored data that cannot be aggregated is not the caller's fault
            UseCaseError::Entity(EntityError::InvalidAttribute { .. }) => {
                Self::Internal(e.to_string())
            }
            UseCaseError::Entity(_) => Self::Validation(e.to_string()),
            UseCaseError::SessionNotFound | UseCaseError::SettingsNotFound => {
                Self::NotFound(e.to_string())
            }
            UseCaseError::Repository(_) => Self::Internal(e.to_string()),
        }
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(e: ValueObjectError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
