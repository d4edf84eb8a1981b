//! Routing configuration.

use serde::Deserialize;

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Invalid routing configuration. Fatal at graph build time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Bus velocity must be a finite positive number
    #[error("bus velocity must be positive, got {0} km/h")]
    InvalidVelocity(f64),

    /// Wait time must be a finite non-negative number
    #[error("bus wait time must be non-negative, got {0} min")]
    InvalidWaitTime(f64),
}

/// Parameters for turning road distances into travel times.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before each boarding.
    pub bus_wait_time: f64,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time (minutes) and velocity (km/h).
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check the settings can produce finite, non-negative edge weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.bus_velocity.is_finite() && self.bus_velocity > 0.0) {
            return Err(ConfigError::InvalidVelocity(self.bus_velocity));
        }
        if !(self.bus_wait_time.is_finite() && self.bus_wait_time >= 0.0) {
            return Err(ConfigError::InvalidWaitTime(self.bus_wait_time));
        }
        Ok(())
    }

    /// Minutes needed to cover `meters` at the configured velocity.
    pub fn travel_time(&self, meters: f64) -> f64 {
        (meters / METERS_PER_KM) / self.bus_velocity * MINUTES_PER_HOUR
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}
