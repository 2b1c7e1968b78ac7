//! Shared request-handling state
//!
//! Built once at startup and managed by Rocket; read-only afterwards.

use std::sync::Arc;
use taskbox_domain::{TodoRepository, UserRepository};
use taskbox_infrastructure::db::DatabasePool;
use taskbox_infrastructure::{PasswordService, TokenService};

/// Process-wide services handed to handlers via `&State<ApiState>`
pub struct ApiState {
    /// Credential store
    pub users: Arc<dyn UserRepository>,
    /// Todo store
    pub todos: Arc<dyn TodoRepository>,
    /// Bearer token issue/verify
    pub tokens: TokenService,
    /// Password hashing
    pub passwords: PasswordService,
    /// Connection pool, kept for the health endpoint; `None` when the
    /// stores are not database-backed (tests)
    pub pool: Option<DatabasePool>,
}
