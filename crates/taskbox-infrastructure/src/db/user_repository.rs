//! PostgreSQL credential store

use super::pool::DatabasePool;
use super::run_blocking;
use async_trait::async_trait;
use postgres::error::SqlState;
use postgres::Row;
use taskbox_domain::error::{Error, Result};
use taskbox_domain::ports::UserRepository;
use taskbox_domain::User;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at";

/// Credential store backed by the `users` table
pub struct PostgresUserRepository {
    pool: DatabasePool,
}

impl PostgresUserRepository {
    /// Create a repository over the shared pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &Row) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        let pool = self.pool.clone();
        let name = name.to_owned();
        let email = email.to_owned();
        let password_hash = password_hash.to_owned();

        run_blocking(move || {
            let mut conn = pool.get()?;
            // The UNIQUE constraint decides the winner under concurrent
            // signups; no pre-check query.
            let row = conn
                .query_one(
                    format!(
                        "INSERT INTO users (name, email, password_hash) \
                         VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
                    )
                    .as_str(),
                    &[&name, &email, &password_hash],
                )
                .map_err(|e| {
                    if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                        Error::DuplicateEmail
                    } else {
                        Error::database_with_source("Failed to insert user", e)
                    }
                })?;
            Ok(user_from_row(&row))
        })
        .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let pool = self.pool.clone();
        let email = email.to_owned();

        run_blocking(move || {
            let mut conn = pool.get()?;
            let row = conn
                .query_opt(
                    format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1").as_str(),
                    &[&email],
                )
                .map_err(|e| Error::database_with_source("Failed to query user by email", e))?;
            Ok(row.as_ref().map(user_from_row))
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = pool.get()?;
            let row = conn
                .query_opt(
                    format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1").as_str(),
                    &[&id],
                )
                .map_err(|e| Error::database_with_source("Failed to query user by id", e))?;
            Ok(row.as_ref().map(user_from_row))
        })
        .await
    }
}
