//! Schema bootstrap
//!
//! Idempotent table creation run once at startup. The UNIQUE constraint on
//! `users.email` is the single concurrency-sensitive invariant in the
//! system; the store owns it so concurrent signups race inside PostgreSQL
//! rather than in application code.

use super::pool::DatabasePool;
use super::run_blocking;
use taskbox_domain::error::{Error, Result};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            BIGSERIAL PRIMARY KEY,
    name          VARCHAR(255) NOT NULL,
    email         VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS todos (
    id          BIGSERIAL PRIMARY KEY,
    title       VARCHAR(255) NOT NULL,
    description TEXT,
    done        BOOLEAN NOT NULL DEFAULT FALSE,
    reminder_at TIMESTAMPTZ,
    priority    VARCHAR(10),
    due_date    TIMESTAMPTZ,
    tags        VARCHAR(255),
    owner_id    BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS todos_owner_id_idx ON todos (owner_id);
";

/// Create the tables if they do not exist yet
pub async fn init_schema(pool: &DatabasePool) -> Result<()> {
    let pool = pool.clone();
    run_blocking(move || {
        let mut conn = pool.get()?;
        conn.batch_execute(SCHEMA)
            .map_err(|e| Error::database_with_source("Schema initialization failed", e))
    })
    .await
}
