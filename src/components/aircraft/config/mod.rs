mod aero;
mod control;
mod environment;
mod loader;
mod physics;
mod propulsion;

pub use aero::{DragConfig, LiftConfig, LiftModel, StabilityConfig, StallProfile};
pub use control::OrientationConfig;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigError, ConfigFormat};
pub use physics::{PhysicsConfig, SpawnConfig};
pub use propulsion::{EngineConfig, FuelConfig, ThrustConfig, ThrustModel};

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::systems::SubsystemKind;

/// Which integrator advances the aircraft's attitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorMode {
    /// Torque → angular velocity → quaternion.
    #[default]
    RigidBody,
    /// Attitude driven straight from control input × configured rate.
    Direct,
}

/// Complete per-aircraft configuration, immutable after spawn.
///
/// Optional sections enable their subsystem when present. Environment and
/// gravity are always built unless listed in `disabled_subsystems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub integrator: IntegratorMode,
    #[serde(default)]
    pub spawn: SpawnConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    pub engine: Option<EngineConfig>,
    pub fuel: Option<FuelConfig>,
    pub thrust: Option<ThrustConfig>,
    pub lift: Option<LiftConfig>,
    pub drag: Option<DragConfig>,
    pub stability: Option<StabilityConfig>,
    pub orientation: Option<OrientationConfig>,
    #[serde(default)]
    pub disabled_subsystems: Vec<SubsystemKind>,
}

fn default_name() -> String {
    "aircraft".to_string()
}

impl Default for AircraftConfig {
    /// The `Cessna172` preset is chosen as the default for convenience.
    fn default() -> Self {
        Self::cessna_172()
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` specifying a built-in preset, a file on
    ///              disk, or an already-built configuration.
    ///
    /// # Returns
    /// The validated configuration or the error raised while loading it.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Preset(preset) => Ok(Self::from_preset(preset)),
            AircraftSource::File(path) => Self::from_file(path),
            AircraftSource::Inline(config) => Ok(config.validated()),
        }
    }

    pub fn from_preset(preset: AircraftPreset) -> Self {
        match preset {
            AircraftPreset::Cessna172 => Self::cessna_172(),
            AircraftPreset::Trainer => Self::trainer(),
        }
    }

    /// Loads a YAML or JSON file, picking the format from the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        loader::load(path)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        loader::parse(contents, ConfigFormat::Yaml)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        loader::parse(contents, ConfigFormat::Json)
    }

    /// Clamps every out-of-range value to a safe bound, logging each change.
    pub fn validated(mut self) -> Self {
        self.spawn = self.spawn.validated();
        self.physics = self.physics.validated();
        self.environment = self.environment.validated();
        self.engine = self.engine.map(EngineConfig::validated);
        self.fuel = self.fuel.map(FuelConfig::validated);
        self.thrust = self.thrust.map(ThrustConfig::validated);
        self.lift = self.lift.map(LiftConfig::validated);
        self.drag = self.drag.map(DragConfig::validated);
        self.stability = self.stability.map(StabilityConfig::validated);
        self.orientation = self.orientation.map(OrientationConfig::validated);

        if self.integrator == IntegratorMode::Direct && self.stability.is_some() {
            warn!(
                "{}: stability is ignored by the direct integrator",
                self.name
            );
        }

        self
    }

    /// Subsystems to build, in their fixed execution order.
    pub fn enabled_subsystems(&self) -> Vec<SubsystemKind> {
        let direct = self.integrator == IntegratorMode::Direct;

        SubsystemKind::ORDER
            .into_iter()
            .filter(|kind| !self.disabled_subsystems.contains(kind))
            .filter(|kind| match kind {
                SubsystemKind::Engine => self.engine.is_some(),
                SubsystemKind::Fuel => self.fuel.is_some(),
                SubsystemKind::Environment | SubsystemKind::Gravity => true,
                SubsystemKind::Thrust => self.thrust.is_some(),
                SubsystemKind::Lift => self.lift.is_some(),
                SubsystemKind::Drag => self.drag.is_some(),
                SubsystemKind::Orientation => !direct && self.orientation.is_some(),
                SubsystemKind::Stability => !direct && self.stability.is_some(),
            })
            .collect()
    }

    pub fn cessna_172() -> Self {
        Self {
            name: "Cessna172".to_string(),
            integrator: IntegratorMode::RigidBody,
            spawn: SpawnConfig {
                position: Vector3::new(0.0, 500.0, 0.0),
                airspeed: 55.0,
                heading_deg: 0.0,
            },
            physics: PhysicsConfig::default(),
            environment: EnvironmentConfig::default(),
            engine: Some(EngineConfig {
                max_thrust: 2500.0,
                max_power_kw: Some(120.0),
                ..Default::default()
            }),
            fuel: Some(FuelConfig::default()),
            thrust: Some(ThrustConfig {
                model: ThrustModel::Propeller,
                ..Default::default()
            }),
            lift: Some(LiftConfig::default()),
            drag: Some(DragConfig::default()),
            stability: Some(StabilityConfig::default()),
            orientation: Some(OrientationConfig::default()),
            disabled_subsystems: Vec::new(),
        }
    }

    /// Light jet trainer flown with the direct integrator and a constant lift coefficient.
    pub fn trainer() -> Self {
        Self {
            name: "Trainer".to_string(),
            integrator: IntegratorMode::Direct,
            spawn: SpawnConfig {
                position: Vector3::new(0.0, 300.0, 0.0),
                airspeed: 50.0,
                heading_deg: 0.0,
            },
            physics: PhysicsConfig {
                mass: 700.0,
                inertia: Vector3::new(900.0, 1300.0, 700.0),
                ..Default::default()
            },
            environment: EnvironmentConfig::default(),
            engine: Some(EngineConfig {
                max_thrust: 2500.0,
                spool_rate: 0.5,
                fuel_flow_idle: 0.004,
                fuel_flow_max: 0.03,
                ..Default::default()
            }),
            fuel: Some(FuelConfig {
                capacity: 200.0,
                initial: 200.0,
            }),
            thrust: Some(ThrustConfig::default()),
            lift: Some(LiftConfig {
                model: LiftModel::Constant,
                coefficient: 0.4,
                wing_area: 12.0,
                ..Default::default()
            }),
            drag: Some(DragConfig {
                frontal_area: 12.0,
                ..Default::default()
            }),
            stability: None,
            orientation: Some(OrientationConfig::default()),
            disabled_subsystems: Vec::new(),
        }
    }
}

/// Source for aircraft configuration.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Preset(AircraftPreset),
    File(PathBuf),
    Inline(Box<AircraftConfig>),
}

/// Built-in aircraft types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftPreset {
    Cessna172,
    Trainer,
}

/// Raises `value` to `min`, logging when it changes. NaN is treated as out of range.
pub(crate) fn at_least(field: &str, value: f64, min: f64) -> f64 {
    if value >= min {
        value
    } else {
        warn!("{field} = {value} is below {min}, clamping");
        min
    }
}

/// Clamps `value` into `[min, max]`, logging when it changes.
pub(crate) fn within(field: &str, value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        warn!("{field} = {value} is above {max}, clamping");
        max
    } else {
        at_least(field, value, min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_sections_disable_subsystems() {
        let config = AircraftConfig::from_yaml_str("name: Brick\n").unwrap();

        assert_eq!(
            config.enabled_subsystems(),
            vec![SubsystemKind::Environment, SubsystemKind::Gravity]
        );
        assert_eq!(config.physics, PhysicsConfig::default());
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let yaml = "name: Partial\nengine:\n  max_thrust: 1200.0\n";
        let config = AircraftConfig::from_yaml_str(yaml).unwrap();
        let engine = config.engine.unwrap();

        assert_eq!(engine.max_thrust, 1200.0);
        assert_eq!(engine.idle_n1, EngineConfig::default().idle_n1);
        assert_eq!(engine.spool_rate, EngineConfig::default().spool_rate);
    }

    #[test]
    fn test_subsystem_order_is_canonical() {
        let config = AircraftConfig::cessna_172();
        assert_eq!(config.enabled_subsystems(), SubsystemKind::ORDER.to_vec());
    }

    #[test]
    fn test_disabled_subsystems_are_skipped() {
        let yaml = "name: Floaty\ndisabled_subsystems: [gravity]\ndrag: {}\n";
        let config = AircraftConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(
            config.enabled_subsystems(),
            vec![SubsystemKind::Environment, SubsystemKind::Drag]
        );
    }

    #[test]
    fn test_direct_integrator_drops_rotational_subsystems() {
        let mut config = AircraftConfig::cessna_172();
        config.integrator = IntegratorMode::Direct;

        let kinds = config.enabled_subsystems();
        assert!(!kinds.contains(&SubsystemKind::Orientation));
        assert!(!kinds.contains(&SubsystemKind::Stability));
        assert!(kinds.contains(&SubsystemKind::Lift));
    }

    #[test]
    fn test_validation_clamps_mass_and_fuel() {
        let yaml = "
name: Broken
physics:
  mass: 0.0
  inertia: [0.0, 5.0, -1.0]
engine:
  idle_n1: 50.0
  max_n1: 40.0
fuel:
  capacity: 10.0
  initial: 25.0
stability:
  reference_length: 0.0
";
        let config = AircraftConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.physics.mass, crate::utils::MIN_MASS);
        assert_eq!(config.physics.inertia, Vector3::new(1.0, 5.0, 1.0));
        assert_eq!(config.engine.unwrap().max_n1, 51.0);
        assert_eq!(config.fuel.unwrap().initial, 10.0);
        assert_eq!(
            config.stability.unwrap().reference_length,
            crate::utils::MIN_REFERENCE
        );
    }

    #[test]
    fn test_inline_source_is_validated() {
        let mut config = AircraftConfig::trainer();
        config.physics.mass = -5.0;

        let loaded = AircraftConfig::new(AircraftSource::Inline(Box::new(config))).unwrap();
        assert_eq!(loaded.physics.mass, crate::utils::MIN_MASS);
    }

    #[test]
    fn test_presets_round_trip_through_yaml() {
        let config = AircraftConfig::from_preset(AircraftPreset::Trainer);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = AircraftConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
