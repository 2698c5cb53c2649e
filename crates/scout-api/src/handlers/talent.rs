//! /v1/talent — talent CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::error;
use scout_core::{validate_name, Talent};
use uuid::Uuid;

use crate::models::{CreateTalentRequest, MessageResponse, UpdateTalentRequest};
use crate::router::AppState;

/// Handle `GET /v1/talent` — list all talent profiles, most recently
/// updated first.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Talent>>, StatusCode> {
    let talent = state.talent.list().await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(talent))
}

/// Handle `POST /v1/talent` — create a talent profile.
///
/// # Errors
///
/// Returns `422` if the name is empty and `500` on a store error.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateTalentRequest>,
) -> Result<(StatusCode, Json<Talent>), StatusCode> {
    if validate_name(&body.name).is_err() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let talent = body.into_talent();
    state.talent.insert(talent.clone()).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok((StatusCode::CREATED, Json(talent)))
}

/// Handle `GET /v1/talent/{id}`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Talent>, StatusCode> {
    state
        .talent
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle `PUT /v1/talent/{id}` — partial merge update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTalentRequest>,
) -> Result<Json<Talent>, StatusCode> {
    let mut talent = state
        .talent
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    body.apply(&mut talent);
    if validate_name(&talent.name).is_err() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    talent.touch();

    let replaced = state.talent.replace(talent.clone()).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !replaced {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(talent))
}

/// Handle `DELETE /v1/talent/{id}`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let removed = state.talent.remove(id).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !removed {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(MessageResponse {
        message: format!("Talent {id} deleted."),
    }))
}
