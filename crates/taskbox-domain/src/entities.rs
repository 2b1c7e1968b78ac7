//! Domain entities and write models
//!
//! Plain data records returned by the repository ports. Handlers serialize
//! these directly; `User::password_hash` is never written to a response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user id, assigned by the store on creation
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login key, unique across all accounts
    pub email: String,
    /// Argon2id password hash, opaque to everything but the password service
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Set once on creation, immutable afterwards
    pub created_at: DateTime<Utc>,
}

/// Owner-scoped todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique todo id, assigned by the store on creation
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    pub reminder_at: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
    /// Owning user id; every store operation filters on this
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    /// Bumped by the store on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Full write model for create and replace operations
///
/// Absent optional fields reset to their defaults on replace, which is the
/// difference between PUT and PATCH.
#[derive(Debug, Clone, Default)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    pub reminder_at: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
}

/// Partial write model for PATCH operations
///
/// Only populated fields are written; a `None` field leaves the stored
/// value untouched. An explicitly-null JSON field deserializes to `None`
/// and is therefore indistinguishable from an omitted one - both mean
/// "no change". There is deliberately no way to null out a field via
/// PATCH; PUT is the verb that resets fields.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
    pub reminder_at: Option<DateTime<Utc>>,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
}

impl TodoPatch {
    /// Apply the populated fields to a todo in place
    ///
    /// The canonical merge semantics for stores that do not express them in
    /// a query (the PostgreSQL adapter uses `COALESCE` to the same effect).
    /// Does not touch `updated_at`; the store owns that.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = Some(description.clone());
        }
        if let Some(done) = self.done {
            todo.done = done;
        }
        if let Some(reminder_at) = self.reminder_at {
            todo.reminder_at = Some(reminder_at);
        }
        if let Some(priority) = &self.priority {
            todo.priority = Some(priority.clone());
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = Some(due_date);
        }
        if let Some(tags) = &self.tags {
            todo.tags = Some(tags.clone());
        }
    }
}
