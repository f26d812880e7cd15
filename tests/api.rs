use axum_test::TestServer;
use chrono::{DateTime, Utc};
use mock_sensors::catalog::catalog;
use mock_sensors::jitter::{ALTITUDE_NOISE_M, DEFAULT_DELTA};
use mock_sensors::routes::create_router;
use mock_sensors::state::AppState;
use mock_sensors::system_b::short_model;
use mock_sensors::types::{SystemADetection, SystemBDetection};
use serde_json::{json, Value};
use std::time::Duration;

const EPS: f64 = 1e-9;

fn server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn health_is_constant() {
    let server = server(AppState::default());

    for _ in 0..3 {
        server.get("/system-a/detections").await.assert_status_ok();
        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok"}));
    }
}

#[tokio::test]
async fn system_a_detections_match_catalog() {
    let server = server(AppState::default());
    let before = Utc::now().timestamp() as u64;

    let response = server.get("/system-a/detections").await;
    response.assert_status_ok();
    let detections: Vec<SystemADetection> = response.json();

    let after = Utc::now().timestamp() as u64;
    assert_eq!(detections.len(), 5);
    for (detection, drone) in detections.iter().zip(catalog()) {
        assert_eq!(detection.drone_id, format!("A-{}", drone.id));
        assert!(detection.timestamp >= before && detection.timestamp <= after + 1);
        assert!((detection.location_lat - drone.lat).abs() <= DEFAULT_DELTA + EPS);
        assert!((detection.location_lon - drone.lon).abs() <= DEFAULT_DELTA + EPS);
        assert!((detection.location_alt - drone.alt).abs() <= ALTITUDE_NOISE_M + EPS);
        assert_eq!(detection.drone_model, drone.model);
    }
}

#[tokio::test]
async fn system_b_detections_match_catalog() {
    let server = server(AppState::default());

    let response = server.get("/system-b/detections").await;
    response.assert_status_ok();
    let detections: Vec<SystemBDetection> = response.json();

    assert_eq!(detections.len(), 5);
    for (detection, drone) in detections.iter().zip(catalog()) {
        assert_eq!(detection.serial, format!("SN-{}", drone.id));

        let stamp = DateTime::parse_from_rfc3339(&detection.detection_timestamp).unwrap();
        assert_eq!(stamp.offset().local_minus_utc(), 0);
        let age = Utc::now().signed_duration_since(stamp.with_timezone(&Utc));
        assert!(age.num_seconds().abs() < 5);

        assert_eq!(detection.location.kind, "Point");
        let &[lon, lat, alt] = &detection.location.coordinates[..] else {
            panic!("expected three coordinates");
        };
        assert!((lon - drone.lon).abs() <= DEFAULT_DELTA + EPS);
        assert!((lat - drone.lat).abs() <= DEFAULT_DELTA + EPS);
        assert!((alt - drone.alt).abs() <= ALTITUDE_NOISE_M + EPS);

        assert_eq!(detection.model, short_model(drone.model));
        assert_eq!(detection.manufacturer, drone.manufacturer);
    }
}

#[tokio::test]
async fn system_a_coordinates_change_between_calls() {
    let server = server(AppState::default());

    let first: Vec<SystemADetection> = server.get("/system-a/detections").await.json();
    let second: Vec<SystemADetection> = server.get("/system-a/detections").await.json();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.drone_id, b.drone_id);
        assert_ne!(a.location_lat, b.location_lat, "{} latitude repeated", a.drone_id);
        assert_ne!(a.location_lon, b.location_lon, "{} longitude repeated", a.drone_id);
        assert!(b.timestamp >= a.timestamp);
    }
}

#[tokio::test]
async fn system_b_coordinates_and_timestamps_change_between_calls() {
    let server = server(AppState::default());

    let first: Vec<SystemBDetection> = server.get("/system-b/detections").await.json();
    tokio::time::sleep(Duration::from_millis(2)).await;
    let second: Vec<SystemBDetection> = server.get("/system-b/detections").await.json();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.serial, b.serial);
        let (before, after) = (&a.location.coordinates, &b.location.coordinates);
        assert_ne!(before[0], after[0], "{} longitude repeated", a.serial);
        assert_ne!(before[1], after[1], "{} latitude repeated", a.serial);

        let stamp_a = DateTime::parse_from_rfc3339(&a.detection_timestamp).unwrap();
        let stamp_b = DateTime::parse_from_rfc3339(&b.detection_timestamp).unwrap();
        assert!(stamp_b > stamp_a, "{} timestamp did not advance", a.serial);
    }
}

#[tokio::test]
async fn openapi_document_lists_endpoints() {
    let server = server(AppState::default());

    let response = server.get("/openapi.json").await;
    response.assert_status_ok();
    let doc: Value = response.json();

    for path in ["/health", "/system-a/detections", "/system-b/detections"] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }
    let props = &doc["components"]["schemas"]["SystemADetection"]["properties"];
    assert!(props.get("Locatin_alt").is_some());
}
