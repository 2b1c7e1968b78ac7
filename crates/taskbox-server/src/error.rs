//! Error-to-HTTP translation
//!
//! All domain errors cross into HTTP exactly once, here: [`ApiError`] is
//! the only error type handlers return, and the catchers give guard and
//! framework failures the same stable JSON body shape. No internal detail
//! (SQL text, connection strings, backtraces) ever reaches a response.

use rocket::catch;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use taskbox_domain::Error as DomainError;
use tracing::error;

/// Stable JSON error body: `{"error": <kind>, "message": <text>}`
#[derive(Serialize)]
pub struct ErrorBody {
    /// Error kind
    pub error: &'static str,
    /// Human-readable message, safe to show to clients
    pub message: String,
}

/// Handler-level error carrying its HTTP status
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    error: &'static str,
    message: String,
}

impl ApiError {
    /// 400 with a caller-visible message
    pub fn bad_request(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: Status::BadRequest,
            error,
            message: message.into(),
        }
    }

    /// 400 for a failed login; identical message whether the email or the
    /// password was wrong, to avoid account enumeration
    pub fn invalid_credentials() -> Self {
        Self::bad_request("invalid_credentials", "Invalid email or password.")
    }

    /// 404 with a caller-visible message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: Status::NotFound,
            error: "not_found",
            message: message.into(),
        }
    }

    /// 503 when the backing store is unreachable
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            status: Status::ServiceUnavailable,
            error: "unavailable",
            message: message.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => Self {
                status: Status::UnprocessableEntity,
                error: "validation_error",
                message,
            },
            DomainError::DuplicateEmail => Self::bad_request(
                "duplicate_email",
                "You are already registered. Please login.",
            ),
            DomainError::Authentication { .. } => Self {
                status: Status::Unauthorized,
                error: "unauthorized",
                message: "Invalid or expired token".to_string(),
            },
            DomainError::NotFound { resource } => Self::not_found(format!("{} not found", resource)),
            err => {
                error!(reason = %err, "Request failed with internal error");
                Self {
                    status: Status::InternalServerError,
                    error: "internal_error",
                    message: "Internal server error".to_string(),
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self {
            status: Status::UnprocessableEntity,
            error: "validation_error",
            message: errors.to_string(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let mut response = Json(ErrorBody {
            error: self.error,
            message: self.message,
        })
        .respond_to(request)?;
        response.set_status(self.status);
        Ok(response)
    }
}

/// Generic 401 body for every authentication failure mode
#[catch(401)]
pub fn unauthorized(_req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "unauthorized",
        message: "Invalid or expired token".to_string(),
    })
}

/// 404 for unknown routes
#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "not_found",
        message: "Resource not found".to_string(),
    })
}

/// 422 when the request body fails to parse into the expected shape
#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "validation_error",
        message: "Malformed request body".to_string(),
    })
}

/// Opaque 500
#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "internal_error",
        message: "Internal server error".to_string(),
    })
}
