use crate::catalog::DroneTemplate;
use crate::jitter::{altitude_noise, jitter_default, now_iso, Clock};
use crate::types::{GeoJsonPoint, SystemBDetection, VEHICLE_TYPE_UAV};
use rand::Rng;

pub const SERIAL_PREFIX: &str = "SN-";

/// Output options for the System B feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemBOptions {
    /// Emit the top-level `type: "UAV"` literal.
    pub vehicle_type: bool,
}

/// System B only reports the last word of the model ("DJI Mini 2" -> "2").
pub fn short_model(model: &str) -> &str {
    model.split_whitespace().last().unwrap_or(model)
}

pub fn to_detection<R: Rng + ?Sized>(
    drone: &DroneTemplate,
    rng: &mut R,
    clock: &dyn Clock,
    options: SystemBOptions,
) -> SystemBDetection {
    let detection_timestamp = now_iso(clock);
    let lon = jitter_default(rng, drone.lon);
    let lat = jitter_default(rng, drone.lat);
    let alt = altitude_noise(rng, drone.alt);

    SystemBDetection {
        serial: format!("{}{}", SERIAL_PREFIX, drone.id),
        detection_timestamp,
        location: GeoJsonPoint::new(lon, lat, alt),
        vehicle_type: options.vehicle_type.then(|| VEHICLE_TYPE_UAV.to_string()),
        model: short_model(drone.model).to_string(),
        manufacturer: drone.manufacturer.to_string(),
    }
}

pub fn detections<R: Rng + ?Sized>(
    drones: &[DroneTemplate],
    rng: &mut R,
    clock: &dyn Clock,
    options: SystemBOptions,
) -> Vec<SystemBDetection> {
    drones
        .iter()
        .map(|drone| to_detection(drone, rng, clock, options))
        .collect()
}
