use serde::Deserialize;

/// Overall application configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub database: DatabaseSettings,
    pub api: ApiSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

/// Database connection and pool configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Maximum lifetime of a pooled connection, in seconds.
    pub max_lifetime: u64,
    /// How long a connection may sit idle before being closed, in seconds.
    pub idle_timeout: u64,
    /// How long to wait when acquiring a connection, in seconds.
    pub acquire_timeout: u64,
}

/// Configuration for the API server.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
}
