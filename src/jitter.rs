use crate::error::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

/// Default jitter half-width, in degrees. Sized for lat/lon noise.
pub const DEFAULT_DELTA: f64 = 0.0005;

/// Altitude noise half-width in meters
pub const ALTITUDE_NOISE_M: f64 = 5.0;

/// Source of the current time. Injected so tests can pin timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[cfg(test)]
pub(crate) struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns `value` shifted by a uniform draw from `[-delta, delta]`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, value: f64, delta: f64) -> f64 {
    let delta = delta.abs();
    value + rng.gen_range(-delta..=delta)
}

pub fn jitter_default<R: Rng + ?Sized>(rng: &mut R, value: f64) -> f64 {
    jitter(rng, value, DEFAULT_DELTA)
}

/// Adds altitude-scale noise in `[-5, 5]` meters to `base`.
pub fn altitude_noise<R: Rng + ?Sized>(rng: &mut R, base: f64) -> f64 {
    base + rng.gen_range(-ALTITUDE_NOISE_M..=ALTITUDE_NOISE_M)
}

/// Current UTC time in whole seconds since the Unix epoch.
pub fn now_epoch(clock: &dyn Clock) -> AppResult<u64> {
    let now = clock.now();
    u64::try_from(now.timestamp())
        .map_err(|_| AppError::Clock(format!("clock reads before the Unix epoch: {}", now)))
}

/// Current UTC time as ISO-8601 with microseconds and a `+00:00` offset.
pub fn now_iso(clock: &dyn Clock) -> String {
    clock.now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
