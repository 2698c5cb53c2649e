//! /v1/companies — company CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::error;
use scout_core::{validate_name, Company};
use uuid::Uuid;

use crate::models::{CreateCompanyRequest, MessageResponse, UpdateCompanyRequest};
use crate::router::AppState;

/// Handle `GET /v1/companies` — list all companies, most recently
/// updated first.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Company>>, StatusCode> {
    let companies = state.companies.list().await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(companies))
}

/// Handle `POST /v1/companies` — create a company.
///
/// # Errors
///
/// Returns `422` if the name is empty and `500` on a store error.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<Company>), StatusCode> {
    if validate_name(&body.name).is_err() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let company = body.into_company();
    state.companies.insert(company.clone()).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// Handle `GET /v1/companies/{id}`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, StatusCode> {
    state
        .companies
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Handle `PUT /v1/companies/{id}` — partial merge update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCompanyRequest>,
) -> Result<Json<Company>, StatusCode> {
    let mut company = state
        .companies
        .get(id)
        .await
        .map_err(|e| {
            error!("db: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    body.apply(&mut company);
    if validate_name(&company.name).is_err() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    company.touch();

    let replaced = state.companies.replace(company.clone()).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !replaced {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(company))
}

/// Handle `DELETE /v1/companies/{id}`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let removed = state.companies.remove(id).await.map_err(|e| {
        error!("db: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !removed {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(MessageResponse {
        message: format!("Company {id} deleted."),
    }))
}
