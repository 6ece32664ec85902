//! Request handlers, one per method + path.

pub mod auth;
pub mod jobs;

pub use super::AppState;

pub async fn home() -> &'static str {
    "Welcome to the Job Portal"
}
