use crate::handlers::{system_a_handler, system_b_handler};
use crate::observability::health_handler;
use crate::state::AppState;
use crate::types::{GeoJsonPoint, HealthStatus, SystemADetection, SystemBDetection};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::observability::health_handler,
        crate::handlers::system_a_handler,
        crate::handlers::system_b_handler
    ),
    components(schemas(HealthStatus, SystemADetection, SystemBDetection, GeoJsonPoint)),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "System A", description = "System A drone detections"),
        (name = "System B", description = "System B drone detections")
    ),
    info(
        title = "Mock Drone Sensor Systems",
        description = "Mock APIs for Drone Detection Systems A & B",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/system-a/detections", get(system_a_handler))
        .route("/system-b/detections", get(system_b_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
