mod atmosphere;
mod gravity;

pub use atmosphere::EnvironmentSubsystem;
pub use gravity::GravitySubsystem;
