//! PostgreSQL todo store
//!
//! Every statement that targets a specific todo filters by `owner_id` in
//! the statement itself; there is no unscoped fetch followed by an
//! ownership check, so a foreign id and a missing id are indistinguishable
//! at this layer.

use super::pool::DatabasePool;
use super::run_blocking;
use async_trait::async_trait;
use postgres::Row;
use taskbox_domain::error::{Error, Result};
use taskbox_domain::ports::TodoRepository;
use taskbox_domain::{Todo, TodoDraft, TodoPatch};

const TODO_COLUMNS: &str =
    "id, title, description, done, reminder_at, priority, due_date, tags, owner_id, \
     created_at, updated_at";

/// Todo store backed by the `todos` table
pub struct PostgresTodoRepository {
    pool: DatabasePool,
}

impl PostgresTodoRepository {
    /// Create a repository over the shared pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn todo_from_row(row: &Row) -> Todo {
    Todo {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        done: row.get("done"),
        reminder_at: row.get("reminder_at"),
        priority: row.get("priority"),
        due_date: row.get("due_date"),
        tags: row.get("tags"),
        owner_id: row.get("owner_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, owner_id: i64, draft: TodoDraft) -> Result<Todo> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = pool.get()?;
            let row = conn
                .query_one(
                    format!(
                        "INSERT INTO todos \
                         (owner_id, title, description, done, reminder_at, priority, due_date, tags) \
                         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {TODO_COLUMNS}"
                    )
                    .as_str(),
                    &[
                        &owner_id,
                        &draft.title,
                        &draft.description,
                        &draft.done,
                        &draft.reminder_at,
                        &draft.priority,
                        &draft.due_date,
                        &draft.tags,
                    ],
                )
                .map_err(|e| Error::database_with_source("Failed to insert todo", e))?;
            Ok(todo_from_row(&row))
        })
        .await
    }

    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Todo>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = pool.get()?;
            let rows = conn
                .query(
                    format!(
                        "SELECT {TODO_COLUMNS} FROM todos WHERE owner_id = $1 \
                         ORDER BY created_at DESC"
                    )
                    .as_str(),
                    &[&owner_id],
                )
                .map_err(|e| Error::database_with_source("Failed to list todos", e))?;
            Ok(rows.iter().map(todo_from_row).collect())
        })
        .await
    }

    async fn find(&self, owner_id: i64, todo_id: i64) -> Result<Option<Todo>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = pool.get()?;
            let row = conn
                .query_opt(
                    format!(
                        "SELECT {TODO_COLUMNS} FROM todos WHERE owner_id = $1 AND id = $2"
                    )
                    .as_str(),
                    &[&owner_id, &todo_id],
                )
                .map_err(|e| Error::database_with_source("Failed to query todo", e))?;
            Ok(row.as_ref().map(todo_from_row))
        })
        .await
    }

    async fn replace(&self, owner_id: i64, todo_id: i64, draft: TodoDraft) -> Result<Option<Todo>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = pool.get()?;
            let row = conn
                .query_opt(
                    format!(
                        "UPDATE todos SET \
                         title = $3, description = $4, done = $5, reminder_at = $6, \
                         priority = $7, due_date = $8, tags = $9, updated_at = now() \
                         WHERE owner_id = $1 AND id = $2 RETURNING {TODO_COLUMNS}"
                    )
                    .as_str(),
                    &[
                        &owner_id,
                        &todo_id,
                        &draft.title,
                        &draft.description,
                        &draft.done,
                        &draft.reminder_at,
                        &draft.priority,
                        &draft.due_date,
                        &draft.tags,
                    ],
                )
                .map_err(|e| Error::database_with_source("Failed to replace todo", e))?;
            Ok(row.as_ref().map(todo_from_row))
        })
        .await
    }

    async fn patch(&self, owner_id: i64, todo_id: i64, patch: TodoPatch) -> Result<Option<Todo>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = pool.get()?;
            // COALESCE keeps the stored value for unpopulated fields, the
            // same merge TodoPatch::apply_to performs in memory.
            let row = conn
                .query_opt(
                    format!(
                        "UPDATE todos SET \
                         title = COALESCE($3, title), \
                         description = COALESCE($4, description), \
                         done = COALESCE($5, done), \
                         reminder_at = COALESCE($6, reminder_at), \
                         priority = COALESCE($7, priority), \
                         due_date = COALESCE($8, due_date), \
                         tags = COALESCE($9, tags), \
                         updated_at = now() \
                         WHERE owner_id = $1 AND id = $2 RETURNING {TODO_COLUMNS}"
                    )
                    .as_str(),
                    &[
                        &owner_id,
                        &todo_id,
                        &patch.title,
                        &patch.description,
                        &patch.done,
                        &patch.reminder_at,
                        &patch.priority,
                        &patch.due_date,
                        &patch.tags,
                    ],
                )
                .map_err(|e| Error::database_with_source("Failed to patch todo", e))?;
            Ok(row.as_ref().map(todo_from_row))
        })
        .await
    }

    async fn delete(&self, owner_id: i64, todo_id: i64) -> Result<bool> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = pool.get()?;
            let deleted = conn
                .execute(
                    "DELETE FROM todos WHERE owner_id = $1 AND id = $2",
                    &[&owner_id, &todo_id],
                )
                .map_err(|e| Error::database_with_source("Failed to delete todo", e))?;
            Ok(deleted > 0)
        })
        .await
    }
}
