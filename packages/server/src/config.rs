//! Server configuration, resolved once at startup from flags or environment.

use clap::Parser;

/// Command line / environment configuration of the server binary
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "auracast-server", version, about = "Auracast Hub API server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Table holding device profiles
    #[arg(long, env = "DEVICE_PROFILES_TABLE", default_value = "auracast-device-profiles")]
    pub device_profiles_table: String,

    /// Table holding sessions
    #[arg(long, env = "SESSIONS_TABLE", default_value = "auracast-sessions")]
    pub sessions_table: String,

    /// Table holding user settings
    #[arg(long, env = "USER_SETTINGS_TABLE", default_value = "auracast-user-settings")]
    pub user_settings_table: String,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
