//! Typed application configuration
//!
//! Merge order (later sources override earlier):
//! 1. Struct defaults
//! 2. TOML configuration file (`taskbox.toml` or `--config` path)
//! 3. `TASKBOX_`-prefixed environment variables, nested keys split on `__`
//!    (e.g. `TASKBOX_SERVER__PORT`, `TASKBOX_AUTH__JWT_SECRET`)
//! 4. Plain `DATABASE_URL` and `JWT_SECRET` variables, kept for
//!    compatibility with existing deployments

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};
