//! PostgreSQL persistence
//!
//! Connection pooling with r2d2, idempotent schema bootstrap, and the
//! repository adapters behind the domain ports. Statements run blocking on
//! a pooled connection; every adapter method ships its statement to the
//! tokio blocking pool so async request handlers never stall a worker.

pub mod pool;
pub mod schema;
pub mod todo_repository;
pub mod user_repository;

pub use pool::{DatabasePool, PgConnection};
pub use schema::init_schema;
pub use todo_repository::PostgresTodoRepository;
pub use user_repository::PostgresUserRepository;

use taskbox_domain::error::{Error, Result};

/// Run a blocking store interaction on the tokio blocking pool
pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| Error::internal(format!("Blocking store task failed: {}", e)))?
}
