use crate::catalog::catalog;
use crate::error::AppResult;
use crate::state::AppState;
use crate::types::{SystemADetection, SystemBDetection};
use crate::{system_a, system_b};
use axum::{extract::State, response::Json};
use tracing::info;

/// Simulates detections from System A. Timestamp and location change on every request.
#[utoipa::path(
    get,
    path = "/system-a/detections",
    responses(
        (status = 200, description = "System A drone detections", body = [SystemADetection]),
        (status = 500, description = "Clock failure")
    ),
    tag = "System A"
)]
pub async fn system_a_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SystemADetection>>> {
    let mut rng = state.rng();
    let detections = system_a::detections(catalog(), &mut rng, state.clock.as_ref())?;

    info!(count = detections.len(), "Served System A detections");
    Ok(Json(detections))
}

/// Simulates detections from System B using GeoJSON and ISO timestamps.
#[utoipa::path(
    get,
    path = "/system-b/detections",
    responses(
        (status = 200, description = "System B drone detections", body = [SystemBDetection])
    ),
    tag = "System B"
)]
pub async fn system_b_handler(State(state): State<AppState>) -> Json<Vec<SystemBDetection>> {
    let mut rng = state.rng();
    let detections =
        system_b::detections(catalog(), &mut rng, state.clock.as_ref(), state.system_b);

    info!(
        count = detections.len(),
        vehicle_type = state.system_b.vehicle_type,
        "Served System B detections"
    );
    Json(detections)
}
