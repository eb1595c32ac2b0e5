use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub type ApiResult<T> = Result<T, ApiError>;

/// Unified error type for every handler. Converts to an HTTP status plus a
/// structured JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed input (400)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Duplicate email or name (400)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad login; same error for unknown email and wrong password (400)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing/invalid/expired token, or token for an unknown user (401)
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Resource absent or owned by someone else, indistinguishable (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Anything else (500); detail is logged, not exposed
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg),
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                "invalid_credentials",
                "Invalid credentials".to_string(),
            ),
            // 401 carries the bearer challenge alongside the JSON body.
            ApiError::Unauthenticated(message) => {
                let body = Json(ErrorResponse {
                    error: "unauthenticated".to_string(),
                    message,
                });
                let mut response = (StatusCode::UNAUTHORIZED, body).into_response();
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer"),
                );
                return response;
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                let msg = match db_err.constraint() {
                    Some(c) if c.contains("email") => "Email already registered",
                    Some(c) if c.contains("name") => "Name already registered",
                    _ => "Already exists",
                };
                ApiError::Conflict(msg.to_string())
            }
            err => ApiError::Internal(err.into()),
        }
    }
}
