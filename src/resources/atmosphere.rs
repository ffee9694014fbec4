use nalgebra::Vector3;
use std::fmt::Debug;

use crate::components::EnvironmentConfig;
use crate::utils::{
    deg_to_rad, AIR_GAS_CONSTANT, GRAVITY, ISA_LAPSE_RATE, ISA_SEA_LEVEL_PRESSURE,
    ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE,
};

/// Source of ambient air properties for the Environment subsystem.
pub trait AtmosphereModel: Debug + Send + Sync {
    /// Air density (kg/m³) at `altitude` metres.
    fn air_density(&self, altitude: f64) -> f64;

    /// World-frame wind velocity (m/s) at `position`.
    fn wind(&self, position: &Vector3<f64>) -> Vector3<f64>;

    /// Static air temperature (K).
    fn temperature(&self, altitude: f64) -> f64 {
        isa_temperature(altitude)
    }

    /// Static pressure (Pa).
    fn pressure(&self, altitude: f64) -> f64 {
        isa_pressure(altitude)
    }
}

/// Exponential density profile with a constant wind.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardAtmosphere {
    pub sea_level_density: f64,
    pub scale_height: f64,
    pub wind: Vector3<f64>,
}

impl StandardAtmosphere {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        let heading = deg_to_rad(config.wind_heading_deg);
        Self {
            sea_level_density: config.sea_level_density,
            scale_height: config.scale_height,
            wind: Vector3::new(heading.sin(), 0.0, heading.cos()) * config.wind_speed,
        }
    }
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        Self::from_config(&EnvironmentConfig::default())
    }
}

impl AtmosphereModel for StandardAtmosphere {
    fn air_density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }

    fn wind(&self, _position: &Vector3<f64>) -> Vector3<f64> {
        self.wind
    }
}

/// ISA temperature, constant above the tropopause.
pub fn isa_temperature(altitude: f64) -> f64 {
    ISA_SEA_LEVEL_TEMP - ISA_LAPSE_RATE * altitude.min(ISA_TROPOPAUSE)
}

/// ISA pressure: power law in the troposphere, exponential above it.
pub fn isa_pressure(altitude: f64) -> f64 {
    let exponent = GRAVITY / (AIR_GAS_CONSTANT * ISA_LAPSE_RATE);
    let troposphere =
        |h: f64| ISA_SEA_LEVEL_PRESSURE * (isa_temperature(h) / ISA_SEA_LEVEL_TEMP).powf(exponent);

    if altitude <= ISA_TROPOPAUSE {
        troposphere(altitude)
    } else {
        let tropopause_temp = isa_temperature(ISA_TROPOPAUSE);
        troposphere(ISA_TROPOPAUSE)
            * (-GRAVITY * (altitude - ISA_TROPOPAUSE) / (AIR_GAS_CONSTANT * tropopause_temp)).exp()
    }
}
