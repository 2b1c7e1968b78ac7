//! # taskbox API Server
//!
//! Multi-tenant todo-list backend: signup/login with Argon2id password
//! hashing and HS256 bearer tokens, plus todo CRUD scoped to the
//! authenticated owner.
//!
//! ## HTTP Surface
//!
//! | Path | Method | Auth | Description |
//! |------|--------|------|-------------|
//! | `/signup` | POST | - | Register an account |
//! | `/login` | POST | - | Exchange credentials for a bearer token |
//! | `/todos` | POST | Bearer | Create a todo |
//! | `/todos` | GET | Bearer | List own todos, newest first |
//! | `/todos/<id>` | GET | Bearer | Fetch a todo |
//! | `/todos/<id>` | PUT | Bearer | Replace a todo |
//! | `/todos/<id>` | PATCH | Bearer | Partially update a todo |
//! | `/todos/<id>` | DELETE | Bearer | Delete a todo |
//! | `/health` | GET | - | Liveness and store round-trip check |
//!
//! ## Architecture
//!
//! This crate is the transport layer. Domain contracts live in
//! `taskbox-domain`; configuration, crypto, and the PostgreSQL adapters in
//! `taskbox-infrastructure`. Handlers receive the authenticated [`User`]
//! entity from the [`auth::CurrentUser`] request guard and reach storage
//! only through the repository ports, so the whole surface is testable
//! against in-memory doubles.
//!
//! [`User`]: taskbox_domain::User

pub mod auth;
pub mod error;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;
pub mod state;

// Re-export core entry points for public API
pub use init::run;
pub use state::ApiState;
