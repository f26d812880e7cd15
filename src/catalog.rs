/// A simulated drone that every detection feed reports on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneTemplate {
    pub id: &'static str,
    /// Base latitude in degrees
    pub lat: f64,
    /// Base longitude in degrees
    pub lon: f64,
    /// Base altitude in meters
    pub alt: f64,
    pub model: &'static str,
    pub manufacturer: &'static str,
}

static CATALOG: [DroneTemplate; 5] = [
    DroneTemplate {
        id: "DRN-1",
        lat: 32.0853,
        lon: 34.7818,
        alt: 120.0,
        model: "DJI Mini 3",
        manufacturer: "DJI",
    },
    DroneTemplate {
        id: "DRN-2",
        lat: 32.0861,
        lon: 34.7825,
        alt: 98.0,
        model: "DJI Air 2",
        manufacturer: "DJI",
    },
    DroneTemplate {
        id: "DRN-3",
        lat: 32.0847,
        lon: 34.7809,
        alt: 150.0,
        model: "Autel Evo",
        manufacturer: "Autel",
    },
    DroneTemplate {
        id: "DRN-4",
        lat: 32.0870,
        lon: 34.7831,
        alt: 110.0,
        model: "Parrot Anafi",
        manufacturer: "Parrot",
    },
    DroneTemplate {
        id: "DRN-5",
        lat: 32.0839,
        lon: 34.7798,
        alt: 130.0,
        model: "DJI Mini 2",
        manufacturer: "DJI",
    },
];

/// The fixed drone set, in feed order.
pub fn catalog() -> &'static [DroneTemplate] {
    &CATALOG
}
