use bevy::prelude::*;

use crate::components::FuelConfig;
use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};

/// Drains the tank at the engine's fuel flow and cuts the engine when empty.
#[derive(Debug, Clone)]
pub struct FuelSubsystem {
    config: FuelConfig,
}

impl FuelSubsystem {
    pub fn new(config: FuelConfig) -> Self {
        Self { config }
    }
}

impl FlightSubsystem for FuelSubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Fuel
    }

    fn initialize(&mut self, store: &mut PropertyStore) {
        store.write(paths::fuel::CAPACITY, self.config.capacity);
        store.write(paths::fuel::QUANTITY, self.config.initial);
        if self.config.initial <= 0.0 {
            store.write(paths::engine::RUNNING, false);
        }
    }

    fn update(&mut self, store: &mut PropertyStore, dt: f64) {
        let flow = store.read(paths::engine::FUEL_FLOW, 0.0).max(0.0);
        let quantity = (store.read(paths::fuel::QUANTITY, 0.0) - flow * dt).max(0.0);
        store.write(paths::fuel::QUANTITY, quantity);

        if quantity <= 0.0 {
            if store.read(paths::engine::RUNNING, true) {
                info!("Fuel exhausted, engine flameout");
            }
            store.write(paths::engine::RUNNING, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_burns_fuel_flow() {
        let mut fuel = FuelSubsystem::new(FuelConfig {
            capacity: 100.0,
            initial: 50.0,
        });
        let mut store = PropertyStore::new();
        fuel.initialize(&mut store);
        store.write(paths::engine::FUEL_FLOW, 2.0);

        fuel.update(&mut store, 0.5);
        assert_relative_eq!(store.read(paths::fuel::QUANTITY, 0.0), 49.0);
        assert!(store.read(paths::engine::RUNNING, true));
    }

    #[test]
    fn test_empty_tank_cuts_engine() {
        let mut fuel = FuelSubsystem::new(FuelConfig {
            capacity: 100.0,
            initial: 0.5,
        });
        let mut store = PropertyStore::new();
        fuel.initialize(&mut store);
        store.write(paths::engine::RUNNING, true);
        store.write(paths::engine::FUEL_FLOW, 2.0);

        fuel.update(&mut store, 1.0);

        assert_eq!(store.read(paths::fuel::QUANTITY, -1.0), 0.0);
        assert!(!store.read(paths::engine::RUNNING, true));
    }

    #[test]
    fn test_spawning_empty_keeps_engine_off() {
        let mut fuel = FuelSubsystem::new(FuelConfig {
            capacity: 100.0,
            initial: 0.0,
        });
        let mut store = PropertyStore::new();
        store.write(paths::engine::RUNNING, true);
        fuel.initialize(&mut store);

        assert!(!store.read(paths::engine::RUNNING, true));
    }
}
