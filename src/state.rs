use crate::config::AppConfig;
use crate::jitter::{Clock, SystemClock};
use crate::system_b::SystemBOptions;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

/// Read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub seed: Option<u64>,
    pub system_b: SystemBOptions,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            seed: None,
            system_b: SystemBOptions::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            seed: config.seed,
            system_b: SystemBOptions {
                vehicle_type: config.system_b_vehicle_type,
            },
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_system_b(mut self, options: SystemBOptions) -> Self {
        self.system_b = options;
        self
    }

    /// A fresh random source for one request.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
