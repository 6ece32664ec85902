//! HTTP error responses.
//!
//! Clients only ever see a fixed message. Internal failures are logged here
//! with full detail before being flattened to a 500.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use board::BoardError;
use serde_json::json;
use tracing::error;

/// Which endpoint family produced the error. It decides the body shape:
/// auth endpoints answer `{message}`, job endpoints `{message, status:false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Auth,
    Jobs,
}

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: &'static str,
    pub surface: Surface,
}

pub const EMAIL_TAKEN: &str = "Email already exists.";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const AUTH_SERVER_ERROR: &str = "Server error.";
pub const JOB_NOT_FOUND: &str = "Job not found";
pub const INSERT_FAILED: &str = "Cannot insert! Try again";
pub const JOBS_SERVER_ERROR: &str = "Internal server error";

impl HttpError {
    fn new(status: StatusCode, message: &'static str, surface: Surface) -> Self {
        Self { status, message, surface }
    }

    /// Map a signup/login failure.
    pub fn auth(err: BoardError) -> Self {
        match err {
            BoardError::Conflict => Self::new(StatusCode::BAD_REQUEST, EMAIL_TAKEN, Surface::Auth),
            BoardError::InvalidCredentials => {
                Self::new(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS, Surface::Auth)
            }
            other => {
                error!(error = %other, "Auth request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, AUTH_SERVER_ERROR, Surface::Auth)
            }
        }
    }

    /// Map a job registry failure.
    pub fn jobs(err: BoardError) -> Self {
        match err {
            BoardError::NotFound => Self::not_found(),
            other => {
                error!(error = %other, "Job request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, JOBS_SERVER_ERROR, Surface::Jobs)
            }
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, JOB_NOT_FOUND, Surface::Jobs)
    }

    /// The insert returned no row.
    pub fn insert_failed() -> Self {
        Self::new(StatusCode::NOT_FOUND, INSERT_FAILED, Surface::Jobs)
    }

    /// A request body that is not JSON or does not fit the expected shape.
    ///
    /// There is no client-error kind for this; it gets the endpoint's 500.
    pub fn rejected(surface: Surface, rejection: JsonRejection) -> Self {
        error!(error = %rejection, "Unreadable request body");
        match surface {
            Surface::Auth => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, AUTH_SERVER_ERROR, Surface::Auth)
            }
            Surface::Jobs => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, JOBS_SERVER_ERROR, Surface::Jobs)
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = match self.surface {
            Surface::Auth => json!({ "message": self.message }),
            Surface::Jobs => json!({ "message": self.message, "status": false }),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, HttpError>;
