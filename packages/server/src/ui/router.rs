//! Axum routes that translate HTTP requests into gateway events.

use std::{collections::HashMap, sync::Arc};

use axum::{
    Router,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, MatchedPath, Query, RawPathParams, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::infrastructure::dto::gateway::{GatewayEvent, GatewayResponse};

use super::{
    error::ApiError,
    handler::{GatewayHandler, health_check},
    state::AppState,
};

/// Build the application router.
///
/// Every resource route accepts any method; unsupported verbs are rejected
/// by the handler with 405.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/device-profiles", any(device_profiles))
        .route("/device-profiles/recommended", any(device_profiles))
        .route("/sessions", any(sessions))
        .route("/sessions/{sessionId}", any(sessions))
        .route("/settings/{userId}", any(settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn device_profiles(
    State(state): State<Arc<AppState>>,
    event: GatewayEvent,
) -> GatewayResponse {
    invoke("device-profiles", &state.device_profiles, event).await
}

async fn sessions(State(state): State<Arc<AppState>>, event: GatewayEvent) -> GatewayResponse {
    invoke("sessions", &state.sessions, event).await
}

async fn settings(State(state): State<Arc<AppState>>, event: GatewayEvent) -> GatewayResponse {
    invoke("settings", &state.settings, event).await
}

/// Run one handler invocation inside a span carrying a fresh request id.
async fn invoke<H: GatewayHandler>(name: &str, handler: &H, event: GatewayEvent) -> GatewayResponse {
    let span = tracing::info_span!(
        "invoke",
        handler = name,
        request_id = %Uuid::new_v4(),
        method = %event.http_method,
        resource = %event.resource,
    );

    async {
        let response = handler.handle(&event).await;
        tracing::debug!("Responded with status {}", response.status_code);
        response
    }
    .instrument(span)
    .await
}

impl<S> FromRequest<S> for GatewayEvent
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let resource = parts
            .extensions
            .get::<MatchedPath>()
            .map(|path| path.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        let path_parameters = RawPathParams::from_request_parts(&mut parts, state)
            .await
            .ok()
            .map(|params| {
                params
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect::<HashMap<_, _>>()
            })
            .filter(|params| !params.is_empty());

        let query_string_parameters = match parts.uri.query() {
            Some(_) => {
                let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
                    .map_err(|e| reject(e.body_text()))?;
                Some(params)
            }
            None => None,
        };

        let http_method = parts.method.to_string();
        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| reject(e.body_text()))?;
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| reject(e.to_string()))?;

        Ok(Self {
            http_method,
            resource,
            path_parameters,
            query_string_parameters,
            body: (!body.is_empty()).then_some(body),
        })
    }
}

/// A request that cannot become an event fails like any other internal
/// error, with the same JSON body and headers as a handler response.
fn reject(message: String) -> Response {
    ApiError::Internal(message).into_response().into_response()
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header '{}'", name),
            }
        }

        response
    }
}
