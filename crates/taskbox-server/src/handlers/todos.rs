//! Todo handlers
//!
//! All routes require a bearer token; the [`CurrentUser`] guard resolves
//! the caller before any handler body runs. Every store call is scoped by
//! the caller's id, so a todo owned by someone else is indistinguishable
//! from one that does not exist - both come back 404, never 403.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/todos` | POST | Create a todo |
//! | `/todos` | GET | List own todos, newest first |
//! | `/todos/<id>` | GET | Fetch a todo |
//! | `/todos/<id>` | PUT | Replace a todo (full overwrite) |
//! | `/todos/<id>` | PATCH | Partial update (populated fields only) |
//! | `/todos/<id>` | DELETE | Delete a todo |

use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, put, State};
use taskbox_domain::Todo;
use tracing::info;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::models::{DeleteResponse, TodoUpdateRequest, TodoWriteRequest};
use crate::state::ApiState;

fn todo_not_found() -> ApiError {
    ApiError::not_found("Todo not found")
}

/// Create a todo owned by the caller
///
/// POST /todos
#[post("/todos", format = "json", data = "<payload>")]
pub async fn create_todo(
    user: CurrentUser,
    state: &State<ApiState>,
    payload: Json<TodoWriteRequest>,
) -> Result<Json<Todo>, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let todo = state.todos.create(user.0.id, payload.into()).await?;

    info!(user_id = user.0.id, todo_id = todo.id, "Todo created");

    Ok(Json(todo))
}

/// List the caller's todos, newest first
///
/// GET /todos
#[get("/todos")]
pub async fn list_todos(
    user: CurrentUser,
    state: &State<ApiState>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.list_for_owner(user.0.id).await?;
    Ok(Json(todos))
}

/// Fetch a single todo
///
/// GET /todos/<id>
#[get("/todos/<id>")]
pub async fn get_todo(
    user: CurrentUser,
    state: &State<ApiState>,
    id: i64,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .todos
        .find(user.0.id, id)
        .await?
        .ok_or_else(todo_not_found)?;
    Ok(Json(todo))
}

/// Replace a todo, overwriting every mutable field
///
/// PUT /todos/<id>
///
/// Optional fields absent from the payload reset to their defaults.
#[put("/todos/<id>", format = "json", data = "<payload>")]
pub async fn replace_todo(
    user: CurrentUser,
    state: &State<ApiState>,
    id: i64,
    payload: Json<TodoWriteRequest>,
) -> Result<Json<Todo>, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let todo = state
        .todos
        .replace(user.0.id, id, payload.into())
        .await?
        .ok_or_else(todo_not_found)?;

    info!(user_id = user.0.id, todo_id = todo.id, "Todo replaced");

    Ok(Json(todo))
}

/// Partially update a todo
///
/// PATCH /todos/<id>
///
/// Only populated fields change; an explicitly-null field means "no
/// change", same as an omitted one.
#[patch("/todos/<id>", format = "json", data = "<payload>")]
pub async fn update_todo(
    user: CurrentUser,
    state: &State<ApiState>,
    id: i64,
    payload: Json<TodoUpdateRequest>,
) -> Result<Json<Todo>, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let todo = state
        .todos
        .patch(user.0.id, id, payload.into())
        .await?
        .ok_or_else(todo_not_found)?;

    info!(user_id = user.0.id, todo_id = todo.id, "Todo updated");

    Ok(Json(todo))
}

/// Delete a todo
///
/// DELETE /todos/<id>
#[delete("/todos/<id>")]
pub async fn delete_todo(
    user: CurrentUser,
    state: &State<ApiState>,
    id: i64,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.todos.delete(user.0.id, id).await?;
    if !deleted {
        return Err(todo_not_found());
    }

    info!(user_id = user.0.id, todo_id = id, "Todo deleted");

    Ok(Json(DeleteResponse { success: true }))
}
