use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::properties::{paths, PropertyStore};
use crate::utils::SimError;

/// Normalized pilot input for one fixed tick.
///
/// `brake` and the toggles pass through to the store for instrumentation and
/// are not consumed by the physics core.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlInput {
    /// Elevator, +1 nose up.
    pub pitch: f64,
    /// Ailerons, +1 right wing down.
    pub roll: f64,
    /// Rudder, +1 nose right.
    pub yaw: f64,
    /// 0 idle, 1 full power.
    pub throttle: f64,
    pub brake: bool,
    pub toggle_gear: bool,
    pub toggle_flaps: bool,
}

impl ControlInput {
    pub fn new(pitch: f64, roll: f64, yaw: f64, throttle: f64) -> Self {
        Self {
            pitch,
            roll,
            yaw,
            throttle,
            ..Default::default()
        }
        .clamped()
    }

    /// Strict constructor for inputs coming from outside the simulation.
    pub fn try_new(pitch: f64, roll: f64, yaw: f64, throttle: f64) -> Result<Self, SimError> {
        for (name, value, min) in [
            ("pitch", pitch, -1.0),
            ("roll", roll, -1.0),
            ("yaw", yaw, -1.0),
            ("throttle", throttle, 0.0),
        ] {
            if !(min..=1.0).contains(&value) {
                return Err(SimError::InvalidControl(format!(
                    "{name} = {value} outside [{min}, 1]"
                )));
            }
        }
        Ok(Self::new(pitch, roll, yaw, throttle))
    }

    /// Clamps every axis to its range; non-finite values become neutral.
    pub fn clamped(&self) -> Self {
        let axis = |v: f64, min: f64| if v.is_finite() { v.clamp(min, 1.0) } else { 0.0 };
        Self {
            pitch: axis(self.pitch, -1.0),
            roll: axis(self.roll, -1.0),
            yaw: axis(self.yaw, -1.0),
            throttle: axis(self.throttle, 0.0),
            ..*self
        }
    }

    pub fn write_to(&self, store: &mut PropertyStore) {
        store.write(paths::input::PITCH, self.pitch);
        store.write(paths::input::ROLL, self.roll);
        store.write(paths::input::YAW, self.yaw);
        store.write(paths::input::THROTTLE, self.throttle);
        store.write(paths::input::BRAKE, self.brake);
        store.write(paths::input::GEAR_TOGGLE, self.toggle_gear);
        store.write(paths::input::FLAPS_TOGGLE, self.toggle_flaps);
    }
}
