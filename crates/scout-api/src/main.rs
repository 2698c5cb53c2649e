//! TalentScout API server entry point.

use scout_api::{
    config::{ApiConfig, StoreBackend},
    db::connect_and_migrate,
    router::{build_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ApiConfig::from_env()?;
    let state = match &config.backend {
        StoreBackend::Memory => {
            log::info!("using seeded in-memory directories");
            AppState::seeded()
        }
        StoreBackend::Postgres(url) => {
            let pool = connect_and_migrate(url).await?;
            AppState::with_postgres(pool)
        }
    };
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
