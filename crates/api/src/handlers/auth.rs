use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use board::Credentials;
use serde_json::{json, Value};

use super::AppState;
use crate::error::{ApiResult, HttpError, Surface};

pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(credentials) = body.map_err(|r| HttpError::rejected(Surface::Auth, r))?;

    state
        .credentials
        .register(credentials)
        .await
        .map_err(HttpError::auth)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully!" })),
    ))
}

/// Verifies the credentials and nothing else: no token or cookie is issued.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(credentials) = body.map_err(|r| HttpError::rejected(Surface::Auth, r))?;

    state
        .credentials
        .authenticate(credentials)
        .await
        .map_err(HttpError::auth)?;

    Ok(Json(json!({ "message": "Login successful!" })))
}
