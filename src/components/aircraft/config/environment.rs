use serde::{Deserialize, Serialize};

use super::at_least;
use crate::utils::{DENSITY_SCALE_HEIGHT, SEA_LEVEL_DENSITY};

/// Atmosphere model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Air density at zero altitude (kg/m³).
    pub sea_level_density: f64,
    /// Exponential density scale height (m).
    pub scale_height: f64,
    /// Constant wind speed (m/s).
    pub wind_speed: f64,
    /// Direction the wind blows toward, from +Z toward +X (degrees).
    pub wind_heading_deg: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            sea_level_density: SEA_LEVEL_DENSITY,
            scale_height: DENSITY_SCALE_HEIGHT,
            wind_speed: 0.0,
            wind_heading_deg: 0.0,
        }
    }
}

impl EnvironmentConfig {
    pub fn validated(mut self) -> Self {
        self.sea_level_density = at_least("environment.sea_level_density", self.sea_level_density, 0.0);
        self.scale_height = at_least("environment.scale_height", self.scale_height, 1.0);
        self.wind_speed = at_least("environment.wind_speed", self.wind_speed, 0.0);
        self
    }
}
