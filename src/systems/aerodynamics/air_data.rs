use nalgebra::{UnitQuaternion, Vector3};

use crate::properties::{paths, PropertyStore};
use crate::utils::{normalize_or, AIRSPEED_EPSILON, BODY_FORWARD, BODY_RIGHT, BODY_UP, SEA_LEVEL_DENSITY};

/// Airflow-relative quantities for one aircraft at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirData {
    /// Velocity relative to the air mass, world frame (m/s).
    pub relative_velocity: Vector3<f64>,
    /// Magnitude of `relative_velocity` (m/s).
    pub airspeed: f64,
    /// Airflow component along the nose (m/s).
    pub forward_speed: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// `0.5 * density * airspeed²` (Pa).
    pub dynamic_pressure: f64,
    /// Angle of attack (rad).
    pub alpha: f64,
    /// Sideslip (rad).
    pub beta: f64,
    /// Body axes in the world frame.
    pub forward: Vector3<f64>,
    pub up: Vector3<f64>,
    pub right: Vector3<f64>,
}

impl AirData {
    /// Direction the air moves past the aircraft, falling back to straight
    /// over the nose when there is no airflow.
    pub fn airflow_direction(&self) -> Vector3<f64> {
        -normalize_or(&self.relative_velocity, self.forward)
    }

    /// Dynamic pressure on the forward airflow component only.
    pub fn forward_dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.forward_speed * self.forward_speed
    }
}

/// Read-only derivation of [`AirData`] shared by Lift, Drag and Stability so
/// they all work from the same aerodynamic basis.
pub struct AerodynamicSampler;

impl AerodynamicSampler {
    pub fn sample(store: &PropertyStore) -> AirData {
        let velocity = store.read(paths::velocity::VELOCITY, Vector3::zeros());
        let wind = store.read(paths::atmosphere::WIND, Vector3::zeros());
        let density = store.read(paths::atmosphere::DENSITY, SEA_LEVEL_DENSITY);
        let orientation = store.read(
            paths::orientation::ORIENTATION,
            UnitQuaternion::identity(),
        );

        Self::compute(velocity, wind, density, &orientation)
    }

    pub fn compute(
        velocity: Vector3<f64>,
        wind: Vector3<f64>,
        density: f64,
        orientation: &UnitQuaternion<f64>,
    ) -> AirData {
        let forward = orientation * BODY_FORWARD;
        let up = orientation * BODY_UP;
        let right = orientation * BODY_RIGHT;

        let relative_velocity = velocity - wind;
        let airspeed = relative_velocity.norm();

        let forward_speed = relative_velocity.dot(&forward);
        let vertical = relative_velocity.dot(&up);
        let lateral = relative_velocity.dot(&right);

        let (alpha, beta) = if airspeed > AIRSPEED_EPSILON {
            ((-vertical).atan2(forward_speed), lateral.atan2(forward_speed))
        } else {
            (0.0, 0.0)
        };

        AirData {
            relative_velocity,
            airspeed,
            forward_speed,
            density,
            dynamic_pressure: 0.5 * density * airspeed * airspeed,
            alpha,
            beta,
            forward,
            up,
            right,
        }
    }
}
