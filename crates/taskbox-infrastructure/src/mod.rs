//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the domain layer: typed
//! configuration, password hashing, token signing, the PostgreSQL
//! repository adapters, and structured logging.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Argon2id password hashing |
//! | [`auth`] | HS256 bearer token issue/verify |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`db`] | r2d2/postgres pool, schema bootstrap, repository adapters |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |

pub mod auth;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod db;
pub mod logging;

// Re-export commonly used types
pub use auth::TokenService;
pub use config::{AppConfig, ConfigLoader};
pub use crypto::PasswordService;
pub use db::{DatabasePool, PostgresTodoRepository, PostgresUserRepository};
