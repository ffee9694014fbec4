use bevy::prelude::*;
use nalgebra::{Isometry3, Matrix4, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SpawnConfig;
use crate::properties::{paths, PropertyStore};
use crate::utils::{deg_to_rad, heading_to_orientation, BODY_FORWARD, BODY_RIGHT, BODY_UP};

/// Kinematic state of one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// World position (m).
    pub position: Vector3<f64>,
    /// Body-to-world rotation.
    pub orientation: UnitQuaternion<f64>,
    /// World-frame velocity (m/s).
    pub velocity: Vector3<f64>,
    /// Body-frame angular rates (rad/s).
    pub angular_velocity: Vector3<f64>,
    /// Derived speed (m/s).
    pub airspeed: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            airspeed: 0.0,
        }
    }
}

impl AircraftState {
    /// Wings level on the spawn heading, moving along the nose at the spawn airspeed.
    pub fn from_spawn(spawn: &SpawnConfig) -> Self {
        let orientation = heading_to_orientation(deg_to_rad(spawn.heading_deg));
        let velocity = (orientation * BODY_FORWARD) * spawn.airspeed;

        Self {
            position: spawn.position,
            orientation,
            velocity,
            angular_velocity: Vector3::zeros(),
            airspeed: velocity.norm(),
        }
    }

    pub fn read_from(store: &PropertyStore) -> Self {
        let fallback = Self::default();
        Self {
            position: store.read(paths::position::POSITION, fallback.position),
            orientation: store.read(paths::orientation::ORIENTATION, fallback.orientation),
            velocity: store.read(paths::velocity::VELOCITY, fallback.velocity),
            angular_velocity: store.read(paths::velocity::ANGULAR, fallback.angular_velocity),
            airspeed: store.read(paths::velocity::AIRSPEED, fallback.airspeed),
        }
    }

    pub fn write_to(&self, store: &mut PropertyStore) {
        store.write(paths::position::POSITION, self.position);
        store.write(paths::orientation::ORIENTATION, self.orientation);
        store.write(paths::velocity::VELOCITY, self.velocity);
        store.write(paths::velocity::ANGULAR, self.angular_velocity);
        store.write(paths::velocity::AIRSPEED, self.airspeed);
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            orientation: self.orientation,
        }
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.orientation * BODY_FORWARD
    }

    pub fn up(&self) -> Vector3<f64> {
        self.orientation * BODY_UP
    }

    pub fn right(&self) -> Vector3<f64> {
        self.orientation * BODY_RIGHT
    }
}

/// Position and attitude handed to the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    /// Blends two physics states for rendering between ticks.
    ///
    /// Exact at the boundaries: `alpha <= 0` is `previous`, `alpha >= 1` is `current`.
    pub fn interpolate(previous: &AircraftState, current: &AircraftState, alpha: f64) -> Self {
        if !(alpha > 0.0) {
            return previous.pose();
        }
        if alpha >= 1.0 {
            return current.pose();
        }

        let position = previous.position.lerp(&current.position, alpha);
        let orientation = previous
            .orientation
            .try_slerp(&current.orientation, alpha, 1.0e-9)
            .unwrap_or(current.orientation);

        Self {
            position,
            orientation,
        }
    }

    /// Model matrix (body to world).
    pub fn to_matrix(&self) -> Matrix4<f64> {
        Isometry3::from_parts(Translation3::from(self.position), self.orientation).to_homogeneous()
    }

    pub fn to_transform(&self) -> Transform {
        let q = self.orientation.quaternion();
        Transform {
            translation: Vec3::new(
                self.position.x as f32,
                self.position.y as f32,
                self.position.z as f32,
            ),
            rotation: Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32),
            scale: Vec3::ONE,
        }
    }
}
