use nalgebra::Vector3;

use crate::properties::{paths, PropertyStore};
use crate::resources::AtmosphereModel;
use crate::systems::{FlightSubsystem, SubsystemKind};

/// Publishes ambient air properties at the aircraft's current position.
#[derive(Debug)]
pub struct EnvironmentSubsystem {
    model: Box<dyn AtmosphereModel>,
}

impl EnvironmentSubsystem {
    pub fn new(model: Box<dyn AtmosphereModel>) -> Self {
        Self { model }
    }

    fn publish(&self, store: &mut PropertyStore) {
        let position = store.read(paths::position::POSITION, Vector3::zeros());
        let altitude = position.y;

        store.write(paths::atmosphere::DENSITY, self.model.air_density(altitude));
        store.write(paths::atmosphere::TEMPERATURE, self.model.temperature(altitude));
        store.write(paths::atmosphere::PRESSURE, self.model.pressure(altitude));
        store.write(paths::atmosphere::WIND, self.model.wind(&position));
    }
}

impl FlightSubsystem for EnvironmentSubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Environment
    }

    fn initialize(&mut self, store: &mut PropertyStore) {
        self.publish(store);
    }

    fn update(&mut self, store: &mut PropertyStore, _dt: f64) {
        self.publish(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::EnvironmentConfig;
    use crate::resources::StandardAtmosphere;
    use approx::assert_relative_eq;

    #[test]
    fn test_publishes_density_at_altitude() {
        let mut env = EnvironmentSubsystem::new(Box::new(StandardAtmosphere::default()));
        let mut store = PropertyStore::new();
        store.write(paths::position::POSITION, Vector3::new(0.0, 1000.0, 0.0));

        env.update(&mut store, 1.0 / 120.0);

        assert_relative_eq!(
            store.read(paths::atmosphere::DENSITY, 0.0),
            1.225 * (-1000.0_f64 / 8500.0).exp(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            store.read(paths::atmosphere::TEMPERATURE, 0.0),
            288.15 - 6.5,
            epsilon = 1e-9
        );
        assert!(store.read(paths::atmosphere::PRESSURE, 0.0) < 101325.0);
    }

    #[test]
    fn test_publishes_wind() {
        let atmosphere = StandardAtmosphere::from_config(&EnvironmentConfig {
            wind_speed: 5.0,
            ..Default::default()
        });
        let mut env = EnvironmentSubsystem::new(Box::new(atmosphere));
        let mut store = PropertyStore::new();

        env.initialize(&mut store);

        assert_relative_eq!(
            store.read(paths::atmosphere::WIND, Vector3::zeros()),
            Vector3::new(0.0, 0.0, 5.0),
            epsilon = 1e-12
        );
    }
}
