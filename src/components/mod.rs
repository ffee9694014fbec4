pub mod aircraft;

pub use aircraft::{
    AircraftConfig, AircraftInstance, AircraftPreset, AircraftSource, AircraftState,
    ConfigError, ConfigFormat, ControlInput, DragConfig, EngineConfig, EnvironmentConfig,
    FlightTelemetry, FuelConfig, IntegratorMode, LiftConfig, LiftModel, OrientationConfig,
    PhysicsConfig, Pose, SpawnConfig, StabilityConfig, StallProfile, ThrustConfig, ThrustModel,
};
