//! Request authentication
//!
//! The [`CurrentUser`] request guard resolves the caller's identity on
//! every protected route before any domain logic runs:
//!
//! 1. extract the bearer token from the `Authorization` header;
//! 2. verify its signature and claims via the token service;
//! 3. load the referenced user from the credential store.
//!
//! Every failure mode - missing header, malformed scheme, bad signature,
//! missing claim, deleted user - produces the same 401 with the same
//! generic body (see the catcher in [`crate::error`]), so a caller cannot
//! distinguish "token invalid" from "user no longer exists".

use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use taskbox_domain::User;
use tracing::{debug, error};

use crate::state::ApiState;

/// The authenticated caller, resolved from the bearer token
///
/// Add this guard to route handlers that require authentication:
///
/// ```rust,ignore
/// #[get("/todos")]
/// async fn list_todos(user: CurrentUser, state: &State<ApiState>) -> ... {
///     state.todos.list_for_owner(user.0.id).await
/// }
/// ```
pub struct CurrentUser(pub User);

/// Why identity resolution failed; never surfaced to the client in detail
#[derive(Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header
    MissingToken,
    /// Signature, structure, or claim verification failed
    InvalidToken,
    /// Token verified but the referenced user no longer exists
    UnknownUser,
    /// Server state unavailable (misconfigured rocket instance)
    Misconfigured,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentUser {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let state = match request.rocket().state::<ApiState>() {
            Some(state) => state,
            None => {
                error!("ApiState is not managed; authentication cannot run");
                return Outcome::Error((Status::InternalServerError, AuthError::Misconfigured));
            }
        };

        let token = match request
            .headers()
            .get_one("Authorization")
            .and_then(|header| header.strip_prefix("Bearer "))
        {
            Some(token) => token,
            None => {
                return Outcome::Error((Status::Unauthorized, AuthError::MissingToken));
            }
        };

        let user_id = match state.tokens.verify(token) {
            Ok(user_id) => user_id,
            Err(e) => {
                debug!(reason = %e, "Rejected bearer token");
                return Outcome::Error((Status::Unauthorized, AuthError::InvalidToken));
            }
        };

        // Re-query the store per request: a deleted user invalidates all
        // previously issued tokens even though their signatures still
        // check out.
        match state.users.find_by_id(user_id).await {
            Ok(Some(user)) => Outcome::Success(CurrentUser(user)),
            Ok(None) => Outcome::Error((Status::Unauthorized, AuthError::UnknownUser)),
            Err(e) => {
                error!(user_id, reason = %e, "Credential store lookup failed during auth");
                Outcome::Error((Status::Unauthorized, AuthError::UnknownUser))
            }
        }
    }
}
