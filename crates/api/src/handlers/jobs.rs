use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use board::{BoardError, Job, JobFields};
use serde_json::{json, Value};
use tracing::debug;

use super::AppState;
use crate::error::{ApiResult, HttpError, Surface};

/// Ids are integers; anything else cannot name a row.
fn parse_id(raw: &str) -> ApiResult<i32> {
    raw.parse().map_err(|_| {
        debug!(id = raw, "Non-numeric job id");
        HttpError::not_found()
    })
}

fn fields(body: Result<Json<JobFields>, JsonRejection>) -> ApiResult<JobFields> {
    let Json(fields) = body.map_err(|r| HttpError::rejected(Surface::Jobs, r))?;
    Ok(fields)
}

pub async fn post_job(
    State(state): State<AppState>,
    body: Result<Json<JobFields>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    match state.jobs.create(fields(body)?).await {
        Ok(id) => Ok(Json(json!({ "id": id }))),
        Err(BoardError::NotFound) => Err(HttpError::insert_failed()),
        Err(e) => Err(HttpError::jobs(e)),
    }
}

pub async fn all_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<Job>>> {
    let jobs = state.jobs.list_all().await.map_err(HttpError::jobs)?;
    Ok(Json(jobs))
}

pub async fn get_job(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Job>> {
    let job = state
        .jobs
        .get_by_id(parse_id(&id)?)
        .await
        .map_err(HttpError::jobs)?;
    Ok(Json(job))
}

pub async fn update_job(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<JobFields>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    let job = state
        .jobs
        .update(id, fields(body)?)
        .await
        .map_err(HttpError::jobs)?;
    Ok(Json(json!({ "acknowledged": true, "result": job })))
}

pub async fn my_jobs(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Job>>> {
    let jobs = state
        .jobs
        .list_by_poster(&email)
        .await
        .map_err(HttpError::jobs)?;
    Ok(Json(jobs))
}

pub async fn delete_job(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Job>> {
    let job = state
        .jobs
        .delete_by_id(parse_id(&id)?)
        .await
        .map_err(HttpError::jobs)?;
    Ok(Json(job))
}
