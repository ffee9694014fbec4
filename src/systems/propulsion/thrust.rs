use nalgebra::UnitQuaternion;

use crate::components::{ThrustConfig, ThrustModel};
use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};
use crate::utils::{BODY_FORWARD, SEA_LEVEL_DENSITY};

/// Turns engine output into a force along the nose.
#[derive(Debug, Clone)]
pub struct ThrustSubsystem {
    config: ThrustConfig,
}

impl ThrustSubsystem {
    pub fn new(config: ThrustConfig) -> Self {
        Self { config }
    }

    /// Thrust magnitude (N) for the current engine outputs.
    pub fn thrust_magnitude(&self, store: &PropertyStore) -> f64 {
        match self.config.model {
            ThrustModel::Jet => {
                store.read(paths::engine::THRUST, 0.0) * self.config.thrust_scale
            }
            ThrustModel::Propeller => {
                let power = store.read(paths::engine::POWER, 0.0);
                let airspeed = store.read(paths::velocity::AIRSPEED, 0.0);
                let density_ratio =
                    store.read(paths::atmosphere::DENSITY, SEA_LEVEL_DENSITY) / SEA_LEVEL_DENSITY;

                let thrust = power * self.config.prop_efficiency * density_ratio
                    / airspeed.max(self.config.min_airspeed);
                thrust.min(self.config.max_static_thrust)
            }
        }
    }
}

impl FlightSubsystem for ThrustSubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Thrust
    }

    fn update(&mut self, store: &mut PropertyStore, _dt: f64) {
        let orientation = store.read(paths::orientation::ORIENTATION, UnitQuaternion::identity());
        let thrust = (orientation * BODY_FORWARD) * self.thrust_magnitude(store);

        store.write(paths::forces::THRUST, thrust);
        store.accumulate(paths::physics::FORCE, thrust);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_jet_thrust_along_nose() {
        let mut thrust = ThrustSubsystem::new(ThrustConfig {
            thrust_scale: 2.0,
            ..Default::default()
        });
        let mut store = PropertyStore::new();
        store.write(paths::engine::THRUST, 500.0);
        store.write(
            paths::orientation::ORIENTATION,
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f64::consts::FRAC_PI_2),
        );

        thrust.update(&mut store, 1.0 / 120.0);

        let force = store.read(paths::physics::FORCE, Vector3::zeros());
        assert_relative_eq!(force, Vector3::new(1000.0, 0.0, 0.0), epsilon = 1e-9);
        assert_eq!(store.read(paths::forces::THRUST, Vector3::zeros()), force);
    }

    #[test]
    fn test_propeller_thrust_falls_with_airspeed() {
        let thrust = ThrustSubsystem::new(ThrustConfig {
            model: ThrustModel::Propeller,
            prop_efficiency: 0.8,
            min_airspeed: 10.0,
            max_static_thrust: 4000.0,
            ..Default::default()
        });
        let mut store = PropertyStore::new();
        store.write(paths::engine::POWER, 100_000.0);

        store.write(paths::velocity::AIRSPEED, 40.0);
        assert_relative_eq!(thrust.thrust_magnitude(&store), 2000.0);

        store.write(paths::velocity::AIRSPEED, 80.0);
        assert_relative_eq!(thrust.thrust_magnitude(&store), 1000.0);

        // Capped near zero airspeed.
        store.write(paths::velocity::AIRSPEED, 0.0);
        assert_relative_eq!(thrust.thrust_magnitude(&store), 4000.0);
    }

    #[test]
    fn test_no_engine_means_no_thrust() {
        let thrust = ThrustSubsystem::new(ThrustConfig::default());
        assert_eq!(thrust.thrust_magnitude(&PropertyStore::new()), 0.0);
    }
}
