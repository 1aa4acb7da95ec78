//! Core domain models for device profiles, sessions and user settings.

use super::{
    attribute::{AttributeValue, Item},
    error::EntityError,
    value_object::{DeviceId, SessionId, Timestamp, UserId},
};

/// Buffer size used whenever none is given (milliseconds)
pub const DEFAULT_BUFFER_MS: i64 = 100;

/// Name given to sessions created without one
pub const DEFAULT_SESSION_NAME: &str = "Unnamed Session";

/// State given to sessions created without one
pub const DEFAULT_SESSION_STATE: &str = "idle";

/// Lifetime of a session record before the storage layer may remove it
pub const SESSION_TTL_HOURS: i64 = 24;

/// Attributes every device profile submission must carry
pub const REQUIRED_DEVICE_PROFILE_FIELDS: [&str; 4] = ["deviceId", "model", "platform", "osVersion"];

/// Session attributes that may change after creation
pub const UPDATABLE_SESSION_FIELDS: [&str; 6] = [
    "state",
    "devices",
    "channelAssignments",
    "audioConfig",
    "bufferSizeMs",
    "name",
];

/// A device capability submission.
///
/// Profiles are append-only: there is no update or delete path, and a later
/// submission with the same `deviceId` replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    /// Primary key
    pub device_id: DeviceId,
    /// Every submitted attribute plus `createdAt`
    pub attributes: Item,
}

impl DeviceProfile {
    /// Build a profile from a submitted record.
    ///
    /// Attributes beyond the required ones are passed through unmodified.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::MissingField` naming the first absent required
    /// attribute, or `EntityError::InvalidField` if a key attribute is not a string.
    pub fn from_submission(mut attributes: Item, created_at: Timestamp) -> Result<Self, EntityError> {
        for field in REQUIRED_DEVICE_PROFILE_FIELDS {
            if !attributes.contains_key(field) {
                return Err(EntityError::MissingField(field.to_string()));
            }
        }

        let device_id = DeviceId::new(required_string(&attributes, "deviceId")?)?;
        // model is the key of the model index
        required_string(&attributes, "model")?;

        attributes.insert("createdAt".to_string(), created_at.to_iso8601().into());

        Ok(Self {
            device_id,
            attributes,
        })
    }

    /// Convert to the stored record.
    pub fn into_item(self) -> Item {
        self.attributes
    }
}

/// A time-boxed record coordinating several devices' channel assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionId,
    pub host_device_id: AttributeValue,
    pub name: AttributeValue,
    pub created_at: Timestamp,
    pub state: AttributeValue,
    pub devices: AttributeValue,
    pub channel_assignments: AttributeValue,
    pub audio_config: AttributeValue,
    pub buffer_size_ms: AttributeValue,
    /// After this point the storage layer may remove the record
    pub expires_at: Timestamp,
}

impl Session {
    /// Convert to the stored record.
    ///
    /// `expiresAt` is stored as Unix seconds, the form TTL attributes use.
    pub fn into_item(self) -> Item {
        Item::from([
            ("sessionId".to_string(), self.id.into_string().into()),
            ("hostDeviceId".to_string(), self.host_device_id),
            ("name".to_string(), self.name),
            ("createdAt".to_string(), self.created_at.to_iso8601().into()),
            ("state".to_string(), self.state),
            ("devices".to_string(), self.devices),
            ("channelAssignments".to_string(), self.channel_assignments),
            ("audioConfig".to_string(), self.audio_config),
            ("bufferSizeMs".to_string(), self.buffer_size_ms),
            (
                "expiresAt".to_string(),
                self.expires_at.unix_seconds().into(),
            ),
        ])
    }
}

/// Partial update of a session, restricted to [`UPDATABLE_SESSION_FIELDS`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    attributes: Item,
}

impl SessionUpdate {
    /// Keep only the updatable attributes of a request body.
    ///
    /// Anything else in the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::NoUpdatableFields` if none are present.
    pub fn from_body(mut body: Item) -> Result<Self, EntityError> {
        let attributes: Item = UPDATABLE_SESSION_FIELDS
            .iter()
            .filter_map(|field| body.remove_entry(*field))
            .collect();

        if attributes.is_empty() {
            return Err(EntityError::NoUpdatableFields);
        }
        Ok(Self { attributes })
    }

    /// Names of the attributes this update touches.
    pub fn field_names(&self) -> Vec<&str> {
        self.attributes.keys().map(String::as_str).collect()
    }

    pub fn into_attributes(self) -> Item {
        self.attributes
    }
}

/// Per-user settings: an open set of attributes keyed by `userId`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub user_id: UserId,
    pub attributes: Item,
}

impl UserSettings {
    /// Build the full record written on every settings write.
    ///
    /// `userId` and `lastUpdated` are injected, overriding any values the
    /// body carried for them.
    pub fn from_body(user_id: UserId, mut body: Item, last_updated: Timestamp) -> Self {
        body.insert("userId".to_string(), user_id.as_str().into());
        body.insert("lastUpdated".to_string(), last_updated.to_iso8601().into());
        Self {
            user_id,
            attributes: body,
        }
    }

    pub fn into_item(self) -> Item {
        self.attributes
    }
}

fn required_string(attributes: &Item, field: &str) -> Result<String, EntityError> {
    attributes
        .get(field)
        .and_then(AttributeValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| EntityError::InvalidField {
            field: field.to_string(),
            expected: "a string",
        })
}
