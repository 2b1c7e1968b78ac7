//! Health check
//!
//! Unauthenticated liveness probe with a store round-trip. 503 when the
//! database is configured but unreachable.

use rocket::get;
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

use crate::error::ApiError;
use crate::models::HealthResponse;
use crate::state::ApiState;

/// Liveness and store round-trip check
///
/// GET /health
#[get("/health")]
pub async fn health(state: &State<ApiState>) -> Result<Json<HealthResponse>, ApiError> {
    match &state.pool {
        None => Ok(Json(HealthResponse {
            status: "ok",
            database: "disabled",
        })),
        Some(pool) => match pool.health_check().await {
            Ok(()) => Ok(Json(HealthResponse {
                status: "ok",
                database: "up",
            })),
            Err(e) => {
                error!(reason = %e, "Health check failed");
                Err(ApiError::service_unavailable("Database unreachable"))
            }
        },
    }
}
