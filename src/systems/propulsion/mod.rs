mod engine;
mod fuel;
mod thrust;

pub use engine::EngineSubsystem;
pub use fuel::FuelSubsystem;
pub use thrust::ThrustSubsystem;
