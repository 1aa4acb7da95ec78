//! Gateway invocation DTOs.
//!
//! Each handler is invoked with one [`GatewayEvent`] and answers with one
//! [`GatewayResponse`], the same shape an HTTP routing layer hands to a
//! function and expects back.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::Item;

/// One HTTP-style invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub http_method: String,
    /// Route template, e.g. `/sessions/{sessionId}`
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    /// Raw JSON body
    #[serde(default)]
    pub body: Option<String>,
}

impl GatewayEvent {
    pub fn new(http_method: &str, resource: &str) -> Self {
        Self {
            http_method: http_method.to_string(),
            resource: resource.to_string(),
            ..Self::default()
        }
    }

    pub fn with_path_parameter(mut self, name: &str, value: &str) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_query_parameter(mut self, name: &str, value: &str) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    /// Parse the body as a JSON object.
    ///
    /// An absent, blank or `null` body reads as an empty object. Every float
    /// in the body becomes an exact decimal on the way in.
    pub fn json_body(&self) -> Result<Item, serde_json::Error> {
        match self.body.as_deref().map(str::trim) {
            None | Some("") => Ok(Item::new()),
            Some(body) => Ok(serde_json::from_str::<Option<Item>>(body)?.unwrap_or_default()),
        }
    }
}

/// One HTTP-style response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON text, empty for 204
    pub body: String,
}

impl GatewayResponse {
    /// Response with a JSON-serialized body.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self {
                status_code,
                headers: default_headers(),
                body,
            },
            Err(e) => {
                tracing::error!("Failed to serialize response body: {}", e);
                Self {
                    status_code: 500,
                    headers: default_headers(),
                    body: serde_json::json!({ "error": e.to_string() }).to_string(),
                }
            }
        }
    }

    /// Response with an empty body.
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            headers: default_headers(),
            body: String::new(),
        }
    }

    /// Parse the body back as JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Headers attached to every response: JSON content type and permissive CORS.
pub fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type,Authorization".to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            "GET,PUT,POST,DELETE,OPTIONS".to_string(),
        ),
    ])
}
