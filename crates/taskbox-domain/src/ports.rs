//! Repository port traits
//!
//! Storage contracts implemented by the infrastructure layer and consumed
//! by handlers as `Arc<dyn ...>`. Every todo operation that targets a
//! specific id takes the owner id and filters on it in the same store
//! operation - ownership is enforced at the query level, never as a
//! separate check after an unscoped fetch.

use crate::entities::{Todo, TodoDraft, TodoPatch, User};
use crate::error::Result;
use async_trait::async_trait;

/// Credential store port
///
/// Creation is atomic with respect to email uniqueness: under concurrent
/// signups with the same email, exactly one call succeeds and the rest
/// fail with [`Error::DuplicateEmail`](crate::Error::DuplicateEmail).
/// Implementations must delegate the race to the storage engine's own
/// uniqueness constraint, not a lookup-then-insert sequence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user with an already-hashed password
    ///
    /// # Errors
    /// - `Error::DuplicateEmail` if the email is taken
    /// - `Error::Database` on store failure
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User>;

    /// Look up a user by login email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Look up a user by id
    ///
    /// Called on every authenticated request to resolve the bearer token's
    /// subject; `None` for a deleted user invalidates all of that user's
    /// outstanding tokens.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
}

/// Todo store port, owner-scoped throughout
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo for the given owner
    async fn create(&self, owner_id: i64, draft: TodoDraft) -> Result<Todo>;

    /// All todos for the owner, newest first (`created_at` descending)
    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Todo>>;

    /// A single todo, `None` if absent or owned by someone else
    async fn find(&self, owner_id: i64, todo_id: i64) -> Result<Option<Todo>>;

    /// Overwrite every mutable field and bump `updated_at`
    ///
    /// `None` if absent or owned by someone else.
    async fn replace(&self, owner_id: i64, todo_id: i64, draft: TodoDraft) -> Result<Option<Todo>>;

    /// Apply the populated patch fields and bump `updated_at`
    ///
    /// `None` if absent or owned by someone else.
    async fn patch(&self, owner_id: i64, todo_id: i64, patch: TodoPatch) -> Result<Option<Todo>>;

    /// Delete the todo; `false` if absent or owned by someone else
    async fn delete(&self, owner_id: i64, todo_id: i64) -> Result<bool>;
}
