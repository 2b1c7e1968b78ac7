//! Account handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/signup` | POST | Register an account |
//! | `/login` | POST | Exchange credentials for a bearer token |

use rocket::post;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::state::ApiState;

/// Register a new account
///
/// POST /signup
///
/// 400 when the email is already registered; the store's uniqueness
/// constraint decides under concurrent signups.
#[post("/signup", format = "json", data = "<payload>")]
pub async fn signup(
    state: &State<ApiState>,
    payload: Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let password_hash = state.passwords.hash_password(&payload.password)?;
    let user = state
        .users
        .create(&payload.name, &payload.email, &password_hash)
        .await?;

    info!(user_id = user.id, "New account registered");

    Ok(Json(SignupResponse {
        success: true,
        detail: "Your account is successfully registered.".to_string(),
        user_id: user.id,
    }))
}

/// Exchange credentials for a bearer token
///
/// POST /login
///
/// 400 with an identical message whether the email is unknown or the
/// password is wrong.
#[post("/login", format = "json", data = "<payload>")]
pub async fn login(
    state: &State<ApiState>,
    payload: Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let user = match state.users.find_by_email(&payload.email).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown email");
            return Err(ApiError::invalid_credentials());
        }
    };

    // A malformed stored hash verifies as a plain mismatch; both are the
    // same authentication failure from the outside.
    let verified = state
        .passwords
        .verify_password(&payload.password, &user.password_hash)
        .unwrap_or(false);

    if !verified {
        warn!(user_id = user.id, "Login attempt with wrong password");
        return Err(ApiError::invalid_credentials());
    }

    let token = state.tokens.issue(user.id)?;

    info!(user_id = user.id, "Login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
