//! Server startup wiring
//!
//! Loads configuration, initializes logging, connects the pool, bootstraps
//! the schema, and launches the Rocket listener.

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use taskbox_infrastructure::config::ConfigLoader;
use taskbox_infrastructure::db::{self, DatabasePool};
use taskbox_infrastructure::logging::init_logging;
use taskbox_infrastructure::{
    PasswordService, PostgresTodoRepository, PostgresUserRepository, TokenService,
};

use crate::routes;
use crate::state::ApiState;

/// Run the server until shutdown
///
/// # Arguments
/// * `config_path` - Optional configuration file path; defaults and
///   environment variables apply either way
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;

    if config.auth.uses_default_secret() {
        warn!("JWT secret is the development default; set JWT_SECRET before deploying");
    }

    let pool = DatabasePool::connect(config.database.clone())?;
    db::init_schema(&pool).await?;
    info!("Database schema ready");

    let state = ApiState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        todos: Arc::new(PostgresTodoRepository::new(pool.clone())),
        tokens: TokenService::new(config.auth.jwt_secret.clone()),
        passwords: PasswordService::new(),
        pool: Some(pool),
    };

    info!(
        address = %config.server.address,
        port = config.server.port,
        "Starting taskbox API server"
    );

    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));

    let _rocket = routes::rocket(state).configure(figment).launch().await?;

    Ok(())
}
