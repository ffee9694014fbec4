use crate::components::EngineConfig;
use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};
use crate::utils::SEA_LEVEL_DENSITY;

/// Spool dynamics, thrust/power output and fuel demand.
#[derive(Debug, Clone)]
pub struct EngineSubsystem {
    config: EngineConfig,
    n1: f64,
}

impl EngineSubsystem {
    pub fn new(config: EngineConfig) -> Self {
        let n1 = config.idle_n1;
        Self { config, n1 }
    }

    pub fn n1(&self) -> f64 {
        self.n1
    }

    /// Spool level commanded by `throttle` in `[0, 1]`.
    pub fn target_n1(&self, throttle: f64) -> f64 {
        self.config.idle_n1 + (self.config.max_n1 - self.config.idle_n1) * throttle
    }

    /// `idle + (max - idle) * (n1 / max_n1)²`
    pub fn fuel_flow(&self, n1: f64) -> f64 {
        let ratio = n1 / self.config.max_n1;
        self.config.fuel_flow_idle + (self.config.fuel_flow_max - self.config.fuel_flow_idle) * ratio * ratio
    }

    /// First-order lag toward `target`.
    fn spool(&self, target: f64, dt: f64) -> f64 {
        target + (self.n1 - target) * (-self.config.spool_rate * dt).exp()
    }

    fn write_outputs(&self, store: &mut PropertyStore, thrust: f64, power: f64, fuel_flow: f64) {
        store.write(paths::engine::N1, self.n1);
        store.write(paths::engine::THRUST, thrust);
        store.write(paths::engine::FUEL_FLOW, fuel_flow);
        if self.config.max_power_kw.is_some() {
            store.write(paths::engine::POWER, power);
        }
    }
}

impl FlightSubsystem for EngineSubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Engine
    }

    fn initialize(&mut self, store: &mut PropertyStore) {
        self.n1 = self.config.idle_n1;
        store.write(paths::engine::RUNNING, true);
        self.write_outputs(store, 0.0, 0.0, 0.0);
    }

    fn update(&mut self, store: &mut PropertyStore, dt: f64) {
        if !store.read(paths::engine::RUNNING, true) {
            // Winds down toward zero, not idle.
            self.n1 = self.spool(0.0, dt).max(0.0);
            self.write_outputs(store, 0.0, 0.0, 0.0);
            return;
        }

        let throttle = store.read(paths::input::THROTTLE, 0.0).clamp(0.0, 1.0);
        let density = store.read(paths::atmosphere::DENSITY, SEA_LEVEL_DENSITY);

        let target = self.target_n1(throttle);
        self.n1 = self
            .spool(target, dt)
            .clamp(self.config.idle_n1, self.config.max_n1);

        let ratio = (self.n1 - self.config.idle_n1) / (self.config.max_n1 - self.config.idle_n1);
        let density_ratio = density / SEA_LEVEL_DENSITY;

        let thrust = self.config.max_thrust * ratio * density_ratio;
        let power = self.config.max_power_kw.unwrap_or(0.0) * 1000.0 * ratio;

        self.write_outputs(store, thrust, power, self.fuel_flow(self.n1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f64 = 1.0 / 120.0;

    fn engine(spool_rate: f64) -> (EngineSubsystem, PropertyStore) {
        let mut engine = EngineSubsystem::new(EngineConfig {
            spool_rate,
            idle_n1: 20.0,
            max_n1: 100.0,
            ..Default::default()
        });
        let mut store = PropertyStore::new();
        engine.initialize(&mut store);
        (engine, store)
    }

    #[test]
    fn test_initialize_seeds_idle() {
        let (_, store) = engine(0.3);
        assert_eq!(store.read(paths::engine::N1, 0.0), 20.0);
        assert_eq!(store.read(paths::engine::THRUST, -1.0), 0.0);
        assert!(store.read(paths::engine::RUNNING, false));
    }

    #[test]
    fn test_spool_lag() {
        let (mut engine, mut store) = engine(0.3);
        store.write(paths::input::THROTTLE, 1.0);

        engine.update(&mut store, DT);
        let n1 = store.read(paths::engine::N1, 0.0);
        assert!(n1 < 21.0, "n1 jumped to {n1}");
        assert_relative_eq!(n1, 100.0 - 80.0 * (-0.3 * DT).exp(), epsilon = 1e-12);

        let mut previous = n1;
        for _ in 0..600 {
            engine.update(&mut store, DT);
            let n1 = store.read(paths::engine::N1, 0.0);
            assert!(n1 > previous && n1 < 100.0);
            previous = n1;
        }
    }

    #[test]
    fn test_thrust_falls_with_density() {
        let (mut engine, mut store) = engine(50.0);
        store.write(paths::input::THROTTLE, 1.0);
        for _ in 0..240 {
            engine.update(&mut store, DT);
        }
        let sea_level = store.read(paths::engine::THRUST, 0.0);

        store.write(paths::atmosphere::DENSITY, SEA_LEVEL_DENSITY / 2.0);
        engine.update(&mut store, DT);
        let high = store.read(paths::engine::THRUST, 0.0);

        assert_relative_eq!(sea_level, 3000.0, epsilon = 1e-6);
        assert_relative_eq!(high, sea_level / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_fuel_flow_is_quadratic() {
        let (engine, _) = engine(1.0);
        assert_relative_eq!(engine.fuel_flow(100.0), 0.012);
        assert_relative_eq!(engine.fuel_flow(50.0), 0.002 + 0.010 * 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_not_running_winds_down() {
        let (mut engine, mut store) = engine(1.0);
        store.write(paths::input::THROTTLE, 1.0);
        for _ in 0..120 {
            engine.update(&mut store, DT);
        }
        let running_n1 = engine.n1();

        store.write(paths::engine::RUNNING, false);
        engine.update(&mut store, DT);

        assert!(engine.n1() < running_n1);
        assert_eq!(store.read(paths::engine::THRUST, -1.0), 0.0);
        assert_eq!(store.read(paths::engine::FUEL_FLOW, -1.0), 0.0);
    }

    #[test]
    fn test_power_published_only_for_propeller_engines() {
        let (mut jet, mut store) = engine(1.0);
        jet.update(&mut store, DT);
        assert!(!store.has(paths::engine::POWER));

        let mut prop = EngineSubsystem::new(EngineConfig {
            max_power_kw: Some(100.0),
            spool_rate: 100.0,
            ..Default::default()
        });
        let mut store = PropertyStore::new();
        prop.initialize(&mut store);
        store.write(paths::input::THROTTLE, 1.0);
        prop.update(&mut store, 1.0);
        assert_relative_eq!(store.read(paths::engine::POWER, 0.0), 100_000.0, epsilon = 1e-6);
    }
}
