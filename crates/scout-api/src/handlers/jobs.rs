//! /v1/jobs — job posting CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::error;
use scout_core::{validate_name, Job};
use uuid::Uuid;

use crate::models::{CreateJobRequest, MessageResponse, UpdateJobRequest};
use crate::router::AppState;

/// Handle `GET /v1/jobs` — list all jobs, most recently updated first.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Job>>, StatusCode> {
    let jobs = state.jobs.list().await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(jobs))
}

/// Handle `POST /v1/jobs` — create a job posting.
///
/// # Errors
///
/// Returns `422` if the title is empty and `500` on a store error.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), StatusCode> {
    if validate_name(&body.title).is_err() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let job = body.into_job();
    state.jobs.insert(job.clone()).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// Handle `GET /v1/jobs/{id}`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, StatusCode> {
    state
        .jobs
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle `PUT /v1/jobs/{id}` — partial merge update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateJobRequest>,
) -> Result<Json<Job>, StatusCode> {
    let mut job = state
        .jobs
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    body.apply(&mut job);
    if validate_name(&job.title).is_err() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    job.touch();

    let replaced = state.jobs.replace(job.clone()).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !replaced {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(job))
}

/// Handle `DELETE /v1/jobs/{id}`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let removed = state.jobs.remove(id).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !removed {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(MessageResponse {
        message: format!("Job {id} deleted."),
    }))
}
