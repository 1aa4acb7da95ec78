//! Domain factories for creating domain entities.

use super::{
    attribute::{AttributeValue, Item},
    entity::{DEFAULT_BUFFER_MS, DEFAULT_SESSION_NAME, DEFAULT_SESSION_STATE, SESSION_TTL_HOURS, Session},
    error::EntityError,
    value_object::{SessionId, Timestamp},
};

/// Attributes a session creation request must carry
pub const REQUIRED_SESSION_FIELDS: [&str; 2] = ["id", "hostDeviceId"];

/// Factory for building new Session entities from creation requests.
///
/// This factory owns the defaulting rules and the expiry computation,
/// keeping them out of the use case.
pub struct SessionFactory;

impl SessionFactory {
    /// Build a full session record from a creation request.
    ///
    /// Optional attributes fall back to their defaults when absent; a present
    /// value is taken verbatim. The session expires `SESSION_TTL_HOURS` after `now`.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::MissingField` if `id` or `hostDeviceId` is absent
    /// (an empty `id` counts as absent), or `EntityError::InvalidField` if `id`
    /// is not a string.
    pub fn create(mut body: Item, now: Timestamp) -> Result<Session, EntityError> {
        for field in REQUIRED_SESSION_FIELDS {
            if !body.contains_key(field) {
                return Err(EntityError::MissingField(field.to_string()));
            }
        }

        let id = match body.remove("id") {
            Some(AttributeValue::String(id)) => SessionId::new(id)
                .map_err(|_| EntityError::MissingField("id".to_string()))?,
            _ => {
                return Err(EntityError::InvalidField {
                    field: "id".to_string(),
                    expected: "a string",
                });
            }
        };
        let host_device_id = body.remove("hostDeviceId").unwrap_or(AttributeValue::Null);

        let mut take_or = |field: &str, default: AttributeValue| body.remove(field).unwrap_or(default);

        Ok(Session {
            id,
            host_device_id,
            name: take_or("name", DEFAULT_SESSION_NAME.into()),
            created_at: now,
            state: take_or("state", DEFAULT_SESSION_STATE.into()),
            devices: take_or("devices", AttributeValue::List(Vec::new())),
            channel_assignments: take_or("channelAssignments", AttributeValue::List(Vec::new())),
            audio_config: take_or("audioConfig", AttributeValue::Map(Item::new())),
            buffer_size_ms: take_or("bufferSizeMs", DEFAULT_BUFFER_MS.into()),
            expires_at: now.plus_hours(SESSION_TTL_HOURS),
        })
    }
}
