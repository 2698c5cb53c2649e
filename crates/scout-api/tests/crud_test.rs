use axum::http::StatusCode;
use axum_test::TestServer;
use scout_api::router::{build_router, AppState};
use scout_core::{Application, ApplicationStatus, Company, Job};
use serde_json::json;
use uuid::Uuid;

fn server() -> TestServer {
    TestServer::new(build_router(AppState::in_memory())).unwrap()
}

#[tokio::test]
async fn company_crud_round_trip() {
    let server = server();

    let created = server
        .post("/v1/companies")
        .json(&json!({
            "name": "Innovatech Solutions",
            "description": "Leading tech innovator.",
            "industry": "Software",
            "techStack": ["React", "Node.js"]
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let company: Company = created.json();
    assert_eq!(company.name, "Innovatech Solutions");

    let listed = server.get("/v1/companies").await;
    assert_eq!(listed.status_code(), StatusCode::OK);
    let companies: Vec<Company> = listed.json();
    assert_eq!(companies.len(), 1);

    let fetched = server.get(&format!("/v1/companies/{}", company.id)).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);

    let updated = server
        .put(&format!("/v1/companies/{}", company.id))
        .json(&json!({ "hiringStatus": "Actively Hiring" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Company = updated.json();
    assert_eq!(updated.hiring_status.as_deref(), Some("Actively Hiring"));
    // merge semantics: untouched fields survive the update
    assert_eq!(updated.description.as_deref(), Some("Leading tech innovator."));
    assert!(updated.updated_at >= company.updated_at);

    let deleted = server
        .delete(&format!("/v1/companies/{}", company.id))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let gone = server.get(&format!("/v1/companies/{}", company.id)).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_ids_are_404() {
    let server = server();
    let id = Uuid::new_v4();

    let fetched = server.get(&format!("/v1/talent/{id}")).await;
    assert_eq!(fetched.status_code(), StatusCode::NOT_FOUND);

    let updated = server
        .put(&format!("/v1/talent/{id}"))
        .json(&json!({ "title": "Engineer" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::NOT_FOUND);

    let deleted = server.delete(&format!("/v1/jobs/{id}")).await;
    assert_eq!(deleted.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_name_is_unprocessable() {
    let server = server();
    let response = server
        .post("/v1/companies")
        .json(&json!({ "name": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn job_create_defaults_to_active() {
    let server = server();
    let response = server
        .post("/v1/jobs")
        .json(&json!({
            "companyId": Uuid::new_v4(),
            "title": "Software Engineer",
            "description": "Develop amazing software.",
            "location": "Remote",
            "salaryRangeMin": 80_000,
            "salaryRangeMax": 120_000
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let job: Job = response.json();
    assert!(job.is_active);
    assert_eq!(job.salary_range_min, Some(80_000));
}

#[tokio::test]
async fn application_lifecycle() {
    let server = server();

    let created = server
        .post("/v1/applications")
        .json(&json!({ "talentId": Uuid::new_v4(), "jobId": Uuid::new_v4() }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let application: Application = created.json();
    assert_eq!(application.status, ApplicationStatus::Submitted);

    let updated = server
        .put(&format!("/v1/applications/{}", application.id))
        .json(&json!({ "status": "Reviewed" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Application = updated.json();
    assert_eq!(updated.status, ApplicationStatus::Reviewed);

    // unknown status labels are rejected before reaching the store
    let rejected = server
        .put(&format!("/v1/applications/{}", application.id))
        .json(&json!({ "status": "Ghosted" }))
        .await;
    assert!(rejected.status_code().is_client_error());
}

#[tokio::test]
async fn application_requires_both_ids() {
    let server = server();
    let response = server
        .post("/v1/applications")
        .json(&json!({ "talentId": Uuid::new_v4() }))
        .await;
    assert!(response.status_code().is_client_error());
}
