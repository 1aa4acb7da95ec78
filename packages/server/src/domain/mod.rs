//! Domain layer for the Auracast Hub handlers.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod attribute;
pub mod entity;
pub mod error;
pub mod factory;
pub mod recommendation;
pub mod repository;
pub mod value_object;

pub use attribute::{AttributeValue, Decimal, Item};
pub use entity::{DeviceProfile, Session, SessionUpdate, UserSettings};
pub use error::{EntityError, ValueObjectError};
pub use factory::SessionFactory;
pub use recommendation::{BufferRecommendation, RECOMMENDATION_SAMPLE_LIMIT};
pub use repository::{MODEL_INDEX, RepositoryError, TableRepository};
pub use value_object::{DeviceId, Model, Platform, SessionId, Timestamp, UserId};

#[cfg(test)]
pub use repository::MockTableRepository;
