use serde::{Deserialize, Serialize};

use super::at_least;

/// Pilot control response.
///
/// In the rigid-body integrator the rates scale control torque; in the direct
/// integrator they are applied as attitude rates at full deflection (rad/s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    pub pitch_rate: f64,
    pub yaw_rate: f64,
    pub roll_rate: f64,
    /// Airspeed at which control authority is 1.0 (m/s).
    pub control_ref_speed: f64,
    pub min_control_scale: f64,
    pub max_control_scale: f64,
    pub torque_multiplier: f64,
    /// Aerodynamic rate damping, scaled by control authority.
    pub damping_factor: f64,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            pitch_rate: 1.5,
            yaw_rate: 1.0,
            roll_rate: 2.0,
            control_ref_speed: 50.0,
            min_control_scale: 0.1,
            max_control_scale: 1.5,
            torque_multiplier: 1500.0,
            damping_factor: 1500.0,
        }
    }
}

impl OrientationConfig {
    pub fn validated(mut self) -> Self {
        self.control_ref_speed = at_least("orientation.control_ref_speed", self.control_ref_speed, 1.0);
        self.min_control_scale = at_least("orientation.min_control_scale", self.min_control_scale, 0.0);
        self.max_control_scale =
            at_least("orientation.max_control_scale", self.max_control_scale, self.min_control_scale);
        self.torque_multiplier = at_least("orientation.torque_multiplier", self.torque_multiplier, 0.0);
        self.damping_factor = at_least("orientation.damping_factor", self.damping_factor, 0.0);
        self
    }
}
