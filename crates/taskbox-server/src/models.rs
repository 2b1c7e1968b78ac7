//! Request and response models
//!
//! Field bounds match the stored column widths; requests are validated
//! before any store interaction. Todo entities serialize directly as
//! responses (`password_hash` never appears on `User`, which is not
//! exposed at all).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskbox_domain::{TodoDraft, TodoPatch};
use validator::Validate;

/// Signup payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 255))]
    pub password: String,
}

/// Login payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 255))]
    pub password: String,
}

/// Full todo payload for create and replace
///
/// `done` accepts an explicit `null` and treats it as `false`, so a PUT
/// always lands on a concrete value.
#[derive(Debug, Deserialize, Validate)]
pub struct TodoWriteRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    pub done: Option<bool>,
    pub reminder_at: Option<DateTime<Utc>>,
    #[validate(length(max = 10))]
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[validate(length(max = 255))]
    pub tags: Option<String>,
}

impl From<TodoWriteRequest> for TodoDraft {
    fn from(request: TodoWriteRequest) -> Self {
        TodoDraft {
            title: request.title,
            description: request.description,
            done: request.done.unwrap_or(false),
            reminder_at: request.reminder_at,
            priority: request.priority,
            due_date: request.due_date,
            tags: request.tags,
        }
    }
}

/// Partial todo payload for PATCH
///
/// Absent and explicitly-null fields both deserialize to `None` and mean
/// "no change".
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TodoUpdateRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
    pub reminder_at: Option<DateTime<Utc>>,
    #[validate(length(max = 10))]
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[validate(length(max = 255))]
    pub tags: Option<String>,
}

impl From<TodoUpdateRequest> for TodoPatch {
    fn from(request: TodoUpdateRequest) -> Self {
        TodoPatch {
            title: request.title,
            description: request.description,
            done: request.done,
            reminder_at: request.reminder_at,
            priority: request.priority,
            due_date: request.due_date,
            tags: request.tags,
        }
    }
}

/// Signup response
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub detail: String,
    pub user_id: i64,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}
