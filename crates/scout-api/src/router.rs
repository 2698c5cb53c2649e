//! Axum router construction and shared application state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use scout_core::{Application, Company, Job, Talent};
use scout_store::{seed, MemoryDirectory, PgCompanyDirectory, PgTalentDirectory, SharedDirectory};
use serde::Serialize;
use sqlx::PgPool;

use crate::handlers;

/// Directories injected into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Company directory.
    pub companies: SharedDirectory<Company>,
    /// Talent directory.
    pub talent: SharedDirectory<Talent>,
    /// Job directory.
    pub jobs: SharedDirectory<Job>,
    /// Application directory.
    pub applications: SharedDirectory<Application>,
}

impl AppState {
    /// Empty in-memory directories; used by tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            companies: Arc::new(MemoryDirectory::new()),
            talent: Arc::new(MemoryDirectory::new()),
            jobs: Arc::new(MemoryDirectory::new()),
            applications: Arc::new(MemoryDirectory::new()),
        }
    }

    /// In-memory directories pre-loaded with the development fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        let data = seed::seed();
        Self {
            companies: Arc::new(MemoryDirectory::with_rows(data.companies)),
            talent: Arc::new(MemoryDirectory::with_rows(data.talents)),
            jobs: Arc::new(MemoryDirectory::with_rows(data.jobs)),
            applications: Arc::new(MemoryDirectory::with_rows(data.applications)),
        }
    }

    /// `PostgreSQL` directories for the searchable entities; jobs and
    /// applications stay in memory, seeded, as in the original service.
    #[must_use]
    pub fn with_postgres(pool: PgPool) -> Self {
        let data = seed::seed();
        Self {
            companies: Arc::new(PgCompanyDirectory::new(pool.clone())),
            talent: Arc::new(PgTalentDirectory::new(pool)),
            jobs: Arc::new(MemoryDirectory::with_rows(data.jobs)),
            applications: Arc::new(MemoryDirectory::with_rows(data.applications)),
        }
    }
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the Axum application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route(
            "/v1/companies",
            get(handlers::companies::list_handler).post(handlers::companies::create_handler),
        )
        .route(
            "/v1/companies/{id}",
            get(handlers::companies::get_handler)
                .put(handlers::companies::update_handler)
                .delete(handlers::companies::delete_handler),
        )
        .route(
            "/v1/talent",
            get(handlers::talent::list_handler).post(handlers::talent::create_handler),
        )
        .route(
            "/v1/talent/{id}",
            get(handlers::talent::get_handler)
                .put(handlers::talent::update_handler)
                .delete(handlers::talent::delete_handler),
        )
        .route(
            "/v1/jobs",
            get(handlers::jobs::list_handler).post(handlers::jobs::create_handler),
        )
        .route(
            "/v1/jobs/{id}",
            get(handlers::jobs::get_handler)
                .put(handlers::jobs::update_handler)
                .delete(handlers::jobs::delete_handler),
        )
        .route(
            "/v1/applications",
            get(handlers::applications::list_handler).post(handlers::applications::create_handler),
        )
        .route(
            "/v1/applications/{id}",
            get(handlers::applications::get_handler)
                .put(handlers::applications::update_handler)
                .delete(handlers::applications::delete_handler),
        )
        .route(
            "/v1/search/companies",
            post(handlers::search::company_search_handler),
        )
        .route(
            "/v1/search/talent",
            post(handlers::search::talent_search_handler),
        )
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
