use serde::{Deserialize, Serialize};

use super::{at_least, within};

/// Configuration for the engine spool and fuel-burn model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum thrust at sea level static conditions (N)
    pub max_thrust: f64,
    /// Shaft power at full spool for propeller-driven aircraft (kW)
    pub max_power_kw: Option<f64>,
    /// Spool level at idle (%)
    pub idle_n1: f64,
    /// Spool level at full throttle (%)
    pub max_n1: f64,
    /// First-order spool response rate (1/s)
    pub spool_rate: f64,
    /// Fuel flow at idle (kg/s)
    pub fuel_flow_idle: f64,
    /// Fuel flow at full spool (kg/s)
    pub fuel_flow_max: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_thrust: 3000.0,
            max_power_kw: None,
            idle_n1: 20.0,
            max_n1: 100.0,
            spool_rate: 0.8,
            fuel_flow_idle: 0.002,
            fuel_flow_max: 0.012,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelConfig {
    /// Tank capacity (kg)
    pub capacity: f64,
    /// Quantity at spawn (kg)
    pub initial: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            capacity: 150.0,
            initial: 120.0,
        }
    }
}

/// How the Thrust subsystem turns engine output into force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrustModel {
    /// Uses `engine/thrust` directly.
    #[default]
    Jet,
    /// Uses `engine/power` through a constant-efficiency propeller.
    Propeller,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrustConfig {
    pub model: ThrustModel,
    /// Multiplier on the engine thrust (jet model)
    pub thrust_scale: f64,
    /// Propeller efficiency (propeller model)
    pub prop_efficiency: f64,
    /// Airspeed floor used in the power-to-thrust division (m/s)
    pub min_airspeed: f64,
    /// Cap on propeller thrust near zero airspeed (N)
    pub max_static_thrust: f64,
}

impl Default for ThrustConfig {
    fn default() -> Self {
        Self {
            model: ThrustModel::Jet,
            thrust_scale: 1.0,
            prop_efficiency: 0.8,
            min_airspeed: 10.0,
            max_static_thrust: 4000.0,
        }
    }
}

impl EngineConfig {
    pub fn validated(mut self) -> Self {
        self.max_thrust = at_least("engine.max_thrust", self.max_thrust, 0.0);
        self.max_power_kw = self
            .max_power_kw
            .map(|p| at_least("engine.max_power_kw", p, 0.0));
        self.idle_n1 = at_least("engine.idle_n1", self.idle_n1, 0.0);
        self.max_n1 = at_least("engine.max_n1", self.max_n1, self.idle_n1 + 1.0);
        self.spool_rate = at_least("engine.spool_rate", self.spool_rate, 0.01);
        self.fuel_flow_idle = at_least("engine.fuel_flow_idle", self.fuel_flow_idle, 0.0);
        self.fuel_flow_max = at_least("engine.fuel_flow_max", self.fuel_flow_max, self.fuel_flow_idle);
        self
    }
}

impl FuelConfig {
    pub fn validated(mut self) -> Self {
        self.capacity = at_least("fuel.capacity", self.capacity, 0.0);
        self.initial = within("fuel.initial", self.initial, 0.0, self.capacity);
        self
    }
}

impl ThrustConfig {
    pub fn validated(mut self) -> Self {
        self.thrust_scale = at_least("thrust.thrust_scale", self.thrust_scale, 0.0);
        self.prop_efficiency = within("thrust.prop_efficiency", self.prop_efficiency, 0.0, 1.0);
        self.min_airspeed = at_least("thrust.min_airspeed", self.min_airspeed, 0.1);
        self.max_static_thrust = at_least("thrust.max_static_thrust", self.max_static_thrust, 0.0);
        self
    }
}
