use crate::catalog::DroneTemplate;
use crate::error::AppResult;
use crate::jitter::{altitude_noise, jitter_default, now_epoch, Clock};
use crate::types::SystemADetection;
use rand::Rng;

pub const ID_PREFIX: &str = "A-";

/// Maps one catalog entry onto the System A layout.
pub fn to_detection<R: Rng + ?Sized>(
    drone: &DroneTemplate,
    rng: &mut R,
    clock: &dyn Clock,
) -> AppResult<SystemADetection> {
    Ok(SystemADetection {
        drone_id: format!("{}{}", ID_PREFIX, drone.id),
        timestamp: now_epoch(clock)?,
        location_lat: jitter_default(rng, drone.lat),
        location_lon: jitter_default(rng, drone.lon),
        location_alt: altitude_noise(rng, drone.alt),
        drone_model: drone.model.to_string(),
    })
}

pub fn detections<R: Rng + ?Sized>(
    drones: &[DroneTemplate],
    rng: &mut R,
    clock: &dyn Clock,
) -> AppResult<Vec<SystemADetection>> {
    drones
        .iter()
        .map(|drone| to_detection(drone, rng, clock))
        .collect()
}
