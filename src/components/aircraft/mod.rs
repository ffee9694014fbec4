pub mod config;
mod controls;
mod instance;
mod state;
mod telemetry;

pub use config::{
    AircraftConfig, AircraftPreset, AircraftSource, ConfigError, ConfigFormat, DragConfig,
    EngineConfig, EnvironmentConfig, FuelConfig, IntegratorMode, LiftConfig, LiftModel,
    OrientationConfig, PhysicsConfig, SpawnConfig, StabilityConfig, StallProfile, ThrustConfig,
    ThrustModel,
};
pub use controls::ControlInput;
pub use instance::AircraftInstance;
pub use state::{AircraftState, Pose};
pub use telemetry::FlightTelemetry;
