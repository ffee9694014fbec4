use nalgebra::Vector3;

use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};
use crate::utils::{GRAVITY, MIN_MASS};

/// Constant weight along world -Y.
#[derive(Debug, Clone)]
pub struct GravitySubsystem {
    mass: f64,
}

impl GravitySubsystem {
    pub fn new(mass: f64) -> Self {
        Self { mass }
    }
}

impl FlightSubsystem for GravitySubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Gravity
    }

    fn update(&mut self, store: &mut PropertyStore, _dt: f64) {
        let mass = store.read(paths::physics::MASS, self.mass).max(MIN_MASS);
        let weight = Vector3::new(0.0, -mass * GRAVITY, 0.0);

        store.write(paths::forces::GRAVITY, weight);
        store.accumulate(paths::physics::FORCE, weight);
    }
}
