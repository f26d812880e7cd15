use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Literal emitted in the System B `type` field when the vehicle-type variant is on.
pub const VEHICLE_TYPE_UAV: &str = "UAV";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// A System A detection. Field names follow the vendor's wire format,
/// including the misspelled altitude field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "Drone_id": "A-DRN-5",
    "Timestamp": 1768837333,
    "Location_lat": 31.12,
    "Location_lon": 33.56,
    "Locatin_alt": 10.2,
    "Drone_model": "DJI Mini 2"
}))]
pub struct SystemADetection {
    /// Serial number of the detected drone, prefixed with "A-"
    #[serde(rename = "Drone_id")]
    pub drone_id: String,
    /// Unix timestamp in whole seconds
    #[serde(rename = "Timestamp")]
    pub timestamp: u64,
    /// Latitude
    #[serde(rename = "Location_lat")]
    pub location_lat: f64,
    /// Longitude
    #[serde(rename = "Location_lon")]
    pub location_lon: f64,
    /// Altitude of the detected drone. The typo is part of the vendor schema.
    #[serde(rename = "Locatin_alt")]
    pub location_alt: f64,
    /// The model of the drone
    #[serde(rename = "Drone_model")]
    pub drone_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoJsonPoint {
    /// Always "Point"
    #[serde(rename = "type")]
    pub kind: String,
    /// [longitude, latitude, altitude]
    pub coordinates: Vec<f64>,
}

impl GeoJsonPoint {
    pub fn new(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: vec![lon, lat, alt],
        }
    }
}

/// A System B detection, GeoJSON flavored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "Serial": "SN-DRN-1",
    "Detection_timestamp": "2026-01-19T15:56:05.049630+00:00",
    "Location": {
        "type": "Point",
        "coordinates": [34.782258162654294, 32.08483668089487, 124.17810117029919]
    },
    "Model": "3",
    "manufacturer": "DJI"
}))]
pub struct SystemBDetection {
    /// Serial number of the detected drone, prefixed with "SN-"
    #[serde(rename = "Serial")]
    pub serial: String,
    /// Detection timestamp, ISO-8601
    #[serde(rename = "Detection_timestamp")]
    pub detection_timestamp: String,
    /// GeoPoint of the detection: longitude, latitude, altitude
    #[serde(rename = "Location")]
    pub location: GeoJsonPoint,
    /// Vehicle type literal, only present in the vehicle-type variant
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    /// Last word of the drone model
    #[serde(rename = "Model")]
    pub model: String,
    /// The manufacturer of the drone
    pub manufacturer: String,
}
