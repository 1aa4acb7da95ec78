//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Defines a non-empty string identifier value object.
macro_rules! non_empty_string_value_object {
    ($(#[$meta:meta])* $name:ident, $empty:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new value, rejecting empty strings.
            pub fn new(value: String) -> Result<Self, ValueObjectError> {
                if value.is_empty() {
                    return Err($empty);
                }
                Ok(Self(value))
            }

            /// Get the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert to owned String.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

non_empty_string_value_object!(
    /// Device identifier, the primary key of a device profile.
    DeviceId,
    ValueObjectError::DeviceIdEmpty
);

non_empty_string_value_object!(
    /// Session identifier, the primary key of a session.
    SessionId,
    ValueObjectError::SessionIdEmpty
);

non_empty_string_value_object!(
    /// User identifier, the primary key of a settings record.
    UserId,
    ValueObjectError::UserIdEmpty
);

non_empty_string_value_object!(
    /// Device model name (e.g. "Pixel 8"), the key of the model index.
    Model,
    ValueObjectError::ModelOrPlatformEmpty
);

non_empty_string_value_object!(
    /// Device platform name (e.g. "android", "ios").
    Platform,
    ValueObjectError::ModelOrPlatformEmpty
);

/// Timestamp value object.
///
/// Represents a point in time in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(auracast_shared::time::now_utc())
    }

    /// Timestamp `hours` later than this one.
    pub fn plus_hours(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    /// ISO 8601 representation used for `createdAt` / `lastUpdated`.
    pub fn to_iso8601(&self) -> String {
        auracast_shared::time::to_iso8601(&self.0)
    }

    /// Unix seconds, the representation used for TTL attributes.
    pub fn unix_seconds(&self) -> i64 {
        auracast_shared::time::unix_seconds(&self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_session_id_new_success() {
        // テスト項目: 有効なセッション ID を作成できる
        // given (前提条件):
        let id = "s1".to_string();

        // when (操作):
        let result = SessionId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "s1");
    }

    #[test]
    fn test_session_id_empty_error() {
        // テスト項目: 空文字列のセッション ID はエラーになる
        // when (操作):
        let result = SessionId::new(String::new());

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::SessionIdEmpty));
        assert_eq!(result.unwrap_err().to_string(), "sessionId is required");
    }

    #[test]
    fn test_user_id_empty_error() {
        // テスト項目: 空文字列のユーザー ID はエラーになる
        let result = UserId::new(String::new());
        assert_eq!(result, Err(ValueObjectError::UserIdEmpty));
    }

    #[test]
    fn test_model_and_platform_share_error_message() {
        // テスト項目: model / platform の空文字列は同じメッセージのエラーになる
        // when (操作):
        let model = Model::new(String::new());
        let platform = Platform::new(String::new());

        // then (期待する結果):
        assert_eq!(model, Err(ValueObjectError::ModelOrPlatformEmpty));
        assert_eq!(platform, Err(ValueObjectError::ModelOrPlatformEmpty));
    }

    #[test]
    fn test_device_id_display() {
        // テスト項目: Display で内部の文字列がそのまま出力される
        let device_id = DeviceId::new("device-1".to_string()).unwrap();
        assert_eq!(format!("{}", device_id), "device-1");
        assert_eq!(device_id.into_string(), "device-1");
    }

    #[test]
    fn test_timestamp_plus_hours() {
        // テスト項目: 24 時間後の Unix 秒が 86400 秒進む
        // given (前提条件):
        let created_at = Timestamp::new(Utc.with_ymd_and_hms(2026, 1, 6, 0, 0, 0).unwrap());

        // when (操作):
        let expires_at = created_at.plus_hours(24);

        // then (期待する結果):
        assert_eq!(
            expires_at.unix_seconds() - created_at.unix_seconds(),
            24 * 60 * 60
        );
        assert_eq!(expires_at.to_iso8601(), "2026-01-07T00:00:00.000000Z");
    }
}
