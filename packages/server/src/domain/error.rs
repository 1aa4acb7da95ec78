//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// DeviceId validation error
    #[error("deviceId is required")]
    DeviceIdEmpty,

    /// SessionId validation error
    #[error("sessionId is required")]
    SessionIdEmpty,

    /// UserId validation error
    #[error("userId is required")]
    UserIdEmpty,

    /// Model or Platform validation error (both are reported together)
    #[error("model and platform are required")]
    ModelOrPlatformEmpty,

    /// Decimal literal is not of the form `-?digits[.digits]`
    #[error("invalid decimal literal: {0}")]
    DecimalInvalid(String),
}

/// Errors related to entity construction and domain rules
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// A required attribute is absent from the submitted record
    #[error("{0} is required")]
    MissingField(String),

    /// An attribute is present but has the wrong shape
    #[error("{field} must be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    /// A session update carried none of the updatable attributes
    #[error("No fields to update")]
    NoUpdatableFields,

    /// A stored attribute cannot be used for the requested computation
    #[error("invalid {field} value: {value}")]
    InvalidAttribute { field: String, value: String },

    /// Value object validation failed
    #[error(transparent)]
    ValueObject(#[from] ValueObjectError),
}
