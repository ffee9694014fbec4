use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::at_least;
use crate::utils::{MIN_INERTIA, MIN_MASS};

/// Rigid-body and constraint parameters for the integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Total mass (kg).
    pub mass: f64,
    /// Principal moment-of-inertia proxy about the body torque axes
    /// (x pitch, y yaw, z roll) (kg·m²).
    pub inertia: Vector3<f64>,
    /// Ground height used by the constant-floor contact model (m).
    pub min_altitude: f64,
    /// Upper bound on upward vertical speed (m/s).
    pub max_climb_rate: f64,
    /// Rolling friction coefficient applied while in ground contact.
    pub ground_friction: f64,
    /// Upper bound on linear speed (m/s).
    pub max_speed: f64,
    /// Upper bound on body angular rate (rad/s).
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mass: 1100.0,
            inertia: Vector3::new(1825.0, 2667.0, 1285.0),
            min_altitude: 0.0,
            max_climb_rate: 20.0,
            ground_friction: 0.04,
            max_speed: 150.0,
            max_angular_velocity: 5.0,
        }
    }
}

/// Initial kinematic state of a freshly spawned aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// World position (m).
    pub position: Vector3<f64>,
    /// Initial speed along the nose (m/s).
    pub airspeed: f64,
    /// Initial heading from +Z toward +X (degrees).
    pub heading_deg: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 100.0, 0.0),
            airspeed: 0.0,
            heading_deg: 0.0,
        }
    }
}

impl PhysicsConfig {
    pub fn validated(mut self) -> Self {
        self.mass = at_least("physics.mass", self.mass, MIN_MASS);
        self.inertia = self.inertia.map(|i| at_least("physics.inertia", i, MIN_INERTIA));
        self.max_climb_rate = at_least("physics.max_climb_rate", self.max_climb_rate, 0.0);
        self.ground_friction = at_least("physics.ground_friction", self.ground_friction, 0.0);
        self.max_speed = at_least("physics.max_speed", self.max_speed, 1.0);
        self.max_angular_velocity =
            at_least("physics.max_angular_velocity", self.max_angular_velocity, 0.1);
        self
    }
}

impl SpawnConfig {
    pub fn validated(mut self) -> Self {
        self.airspeed = at_least("spawn.airspeed", self.airspeed, 0.0);
        self
    }
}
