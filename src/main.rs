use anyhow::Context;
use clap::Parser;
use mock_sensors::config::AppConfig;
use mock_sensors::observability::init_tracing;
use mock_sensors::routes::create_router;
use mock_sensors::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    init_tracing(&config.log_filter);

    let app = create_router(AppState::from_config(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("System A detections: http://{}/system-a/detections", addr);
    info!("System B detections: http://{}/system-b/detections", addr);
    info!("Swagger UI: http://{}/docs/", addr);
    info!("OpenAPI JSON: http://{}/openapi.json", addr);
    if let Some(seed) = config.seed {
        info!("Jitter seeded with {}", seed);
    }

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
