//! /v1/applications — application CRUD.
//!
//! New applications always start in the `Submitted` status; callers may
//! only move them along via the update endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::error;
use scout_core::Application;
use uuid::Uuid;

use crate::models::{CreateApplicationRequest, MessageResponse, UpdateApplicationRequest};
use crate::router::AppState;

/// Handle `GET /v1/applications` — list all applications, most recently
/// updated first.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Application>>, StatusCode> {
    let applications = state.applications.list().await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(applications))
}

/// Handle `POST /v1/applications` — submit an application.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), StatusCode> {
    let application = body.into_application();
    state
        .applications
        .insert(application.clone())
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// Handle `GET /v1/applications/{id}`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Application>, StatusCode> {
    state
        .applications
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle `PUT /v1/applications/{id}` — status update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateApplicationRequest>,
) -> Result<Json<Application>, StatusCode> {
    let mut application = state
        .applications
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    body.apply(&mut application);
    application.touch();

    let replaced = state
        .applications
        .replace(application.clone())
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    if !replaced {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(application))
}

/// Handle `DELETE /v1/applications/{id}`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let removed = state.applications.remove(id).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !removed {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(MessageResponse {
        message: format!("Application {id} deleted."),
    }))
}
