//! Domain-level error types.

use db::DbError;
use thiserror::Error;

/// Errors produced by the credential manager and job registry.
///
/// The first three variants are expected outcomes that callers surface to
/// clients; everything else is an internal failure.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Signup with an email that is already registered.
    #[error("email already registered")]
    Conflict,

    /// Unknown email or wrong password; the two are indistinguishable.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No job row matches the requested id.
    #[error("job not found")]
    NotFound,

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),

    /// A stored `skills` value did not decode to a list of strings.
    #[error("stored skills are not a list of strings: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(DbError),
}

impl BoardError {
    /// `true` for failures the caller did not cause.
    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::Conflict | Self::InvalidCredentials | Self::NotFound)
    }
}

impl From<DbError> for BoardError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}
