//! /v1/search — company and talent search endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::{debug, error};
use scout_core::{Company, Talent};
use scout_search::{search_companies, search_talents, CompanyQuery, SearchError, SearchPage, TalentQuery};

use crate::router::AppState;

fn search_status(err: &SearchError) -> StatusCode {
    match err {
        SearchError::InvalidLimit(_) | SearchError::InvalidOffset(_) => {
            debug!("rejected search request: {err}");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SearchError::Storage(cause) => {
            error!("search storage: {cause}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle `POST /v1/search/companies` — filtered, paginated company
/// search. The body is a [`CompanyQuery`]; unknown keys are ignored.
///
/// # Errors
///
/// Returns `422` for invalid pagination input and `500` if the
/// directory read fails.
pub async fn company_search_handler(
    State(state): State<AppState>,
    Json(query): Json<CompanyQuery>,
) -> Result<Json<SearchPage<Company>>, StatusCode> {
    search_companies(state.companies.as_ref(), &query)
        .await
        .map(Json)
        .map_err(|e| search_status(&e))
}

/// Handle `POST /v1/search/talent` — filtered, paginated talent search.
/// The body is a [`TalentQuery`]; unknown keys are ignored.
///
/// # Errors
///
/// Returns `422` for invalid pagination input and `500` if the
/// directory read fails.
pub async fn talent_search_handler(
    State(state): State<AppState>,
    Json(query): Json<TalentQuery>,
) -> Result<Json<SearchPage<Talent>>, StatusCode> {
    search_talents(state.talent.as_ref(), &query)
        .await
        .map(Json)
        .map_err(|e| search_status(&e))
}
