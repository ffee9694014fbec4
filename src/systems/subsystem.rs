use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::AircraftConfig;
use crate::properties::PropertyStore;
use crate::resources::StandardAtmosphere;
use crate::systems::aerodynamics::{DragSubsystem, LiftSubsystem, StabilitySubsystem};
use crate::systems::control::OrientationSubsystem;
use crate::systems::environment::{EnvironmentSubsystem, GravitySubsystem};
use crate::systems::propulsion::{EngineSubsystem, FuelSubsystem, ThrustSubsystem};

/// The closed set of subsystem kinds an aircraft can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsystemKind {
    Engine,
    Fuel,
    Environment,
    Gravity,
    Thrust,
    Lift,
    Drag,
    Orientation,
    Stability,
}

impl SubsystemKind {
    /// Execution order within one tick.
    pub const ORDER: [SubsystemKind; 9] = [
        SubsystemKind::Engine,
        SubsystemKind::Fuel,
        SubsystemKind::Environment,
        SubsystemKind::Gravity,
        SubsystemKind::Thrust,
        SubsystemKind::Lift,
        SubsystemKind::Drag,
        SubsystemKind::Orientation,
        SubsystemKind::Stability,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SubsystemKind::Engine => "engine",
            SubsystemKind::Fuel => "fuel",
            SubsystemKind::Environment => "environment",
            SubsystemKind::Gravity => "gravity",
            SubsystemKind::Thrust => "thrust",
            SubsystemKind::Lift => "lift",
            SubsystemKind::Drag => "drag",
            SubsystemKind::Orientation => "orientation",
            SubsystemKind::Stability => "stability",
        }
    }
}

impl fmt::Display for SubsystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stage of the per-tick pipeline.
///
/// Implementations only communicate through the [`PropertyStore`]: they read
/// inputs, write derived properties, and add to the force/torque accumulators.
pub trait FlightSubsystem {
    fn kind(&self) -> SubsystemKind;

    /// Seeds the properties this subsystem owns. Called once at spawn.
    fn initialize(&mut self, _store: &mut PropertyStore) {}

    /// Advances the subsystem by one fixed tick.
    fn update(&mut self, store: &mut PropertyStore, dt: f64);
}

/// Statically dispatched subsystem, built once at spawn from configuration.
#[derive(Debug)]
pub enum Subsystem {
    Engine(EngineSubsystem),
    Fuel(FuelSubsystem),
    Environment(EnvironmentSubsystem),
    Gravity(GravitySubsystem),
    Thrust(ThrustSubsystem),
    Lift(LiftSubsystem),
    Drag(DragSubsystem),
    Orientation(OrientationSubsystem),
    Stability(StabilitySubsystem),
}

impl Subsystem {
    /// Builds the subsystem of the given kind, or `None` when its
    /// configuration section is absent.
    pub fn build(kind: SubsystemKind, config: &AircraftConfig) -> Option<Self> {
        let stall = config.lift.as_ref().map(|lift| lift.stall_profile());

        Some(match kind {
            SubsystemKind::Engine => Subsystem::Engine(EngineSubsystem::new(config.engine.clone()?)),
            SubsystemKind::Fuel => Subsystem::Fuel(FuelSubsystem::new(config.fuel.clone()?)),
            SubsystemKind::Environment => Subsystem::Environment(EnvironmentSubsystem::new(
                Box::new(StandardAtmosphere::from_config(&config.environment)),
            )),
            SubsystemKind::Gravity => Subsystem::Gravity(GravitySubsystem::new(config.physics.mass)),
            SubsystemKind::Thrust => Subsystem::Thrust(ThrustSubsystem::new(config.thrust.clone()?)),
            SubsystemKind::Lift => Subsystem::Lift(LiftSubsystem::new(config.lift.clone()?)),
            SubsystemKind::Drag => Subsystem::Drag(DragSubsystem::new(config.drag.clone()?, stall)),
            SubsystemKind::Orientation => {
                Subsystem::Orientation(OrientationSubsystem::new(config.orientation.clone()?))
            }
            SubsystemKind::Stability => {
                Subsystem::Stability(StabilitySubsystem::new(config.stability.clone()?))
            }
        })
    }

    fn inner(&self) -> &dyn FlightSubsystem {
        match self {
            Subsystem::Engine(s) => s,
            Subsystem::Fuel(s) => s,
            Subsystem::Environment(s) => s,
            Subsystem::Gravity(s) => s,
            Subsystem::Thrust(s) => s,
            Subsystem::Lift(s) => s,
            Subsystem::Drag(s) => s,
            Subsystem::Orientation(s) => s,
            Subsystem::Stability(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn FlightSubsystem {
        match self {
            Subsystem::Engine(s) => s,
            Subsystem::Fuel(s) => s,
            Subsystem::Environment(s) => s,
            Subsystem::Gravity(s) => s,
            Subsystem::Thrust(s) => s,
            Subsystem::Lift(s) => s,
            Subsystem::Drag(s) => s,
            Subsystem::Orientation(s) => s,
            Subsystem::Stability(s) => s,
        }
    }

    pub fn kind(&self) -> SubsystemKind {
        self.inner().kind()
    }

    pub fn initialize(&mut self, store: &mut PropertyStore) {
        self.inner_mut().initialize(store);
    }

    pub fn update(&mut self, store: &mut PropertyStore, dt: f64) {
        self.inner_mut().update(store, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_skips_absent_sections() {
        let mut config = AircraftConfig::cessna_172();
        config.engine = None;

        assert!(Subsystem::build(SubsystemKind::Engine, &config).is_none());
        assert!(Subsystem::build(SubsystemKind::Gravity, &config).is_some());
    }

    #[test]
    fn test_built_subsystem_reports_its_kind() {
        let config = AircraftConfig::cessna_172();
        for kind in SubsystemKind::ORDER {
            let subsystem = Subsystem::build(kind, &config).unwrap();
            assert_eq!(subsystem.kind(), kind);
        }
    }

    #[test]
    fn test_kind_names_match_config_spelling() {
        let kinds: Vec<SubsystemKind> =
            serde_yaml::from_str("[engine, fuel, environment, stability]").unwrap();
        assert_eq!(
            kinds.iter().map(SubsystemKind::to_string).collect::<Vec<_>>(),
            vec!["engine", "fuel", "environment", "stability"]
        );
    }
}
