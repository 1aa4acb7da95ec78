//! Shared application state.

use std::sync::Arc;

use crate::{
    config::ServerConfig,
    infrastructure::repository::{device_profiles_table, sessions_table, user_settings_table},
};

use super::handler::{DeviceProfileHandler, SessionHandler, SettingsHandler};

/// One handler per table, created once at startup
pub struct AppState {
    pub device_profiles: DeviceProfileHandler,
    pub sessions: SessionHandler,
    pub settings: SettingsHandler,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!(
            "Tables: device profiles '{}', sessions '{}', user settings '{}'",
            config.device_profiles_table,
            config.sessions_table,
            config.user_settings_table
        );

        Self {
            device_profiles: DeviceProfileHandler::new(Arc::new(device_profiles_table(
                &config.device_profiles_table,
            ))),
            sessions: SessionHandler::new(Arc::new(sessions_table(&config.sessions_table))),
            settings: SettingsHandler::new(Arc::new(user_settings_table(
                &config.user_settings_table,
            ))),
        }
    }
}
