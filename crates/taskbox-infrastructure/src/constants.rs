//! Centralized configuration constants

use std::time::Duration;

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "TASKBOX";

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "taskbox.toml";

/// Environment variable controlling the tracing filter
pub const LOG_FILTER_ENV: &str = "TASKBOX_LOG";

/// Development-only token signing secret; must be overridden in deployment
pub const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";

/// Default bind address
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default maximum connections in the database pool
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Default timeout when waiting for a pooled connection
pub const DB_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
