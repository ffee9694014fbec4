pub mod aerodynamics;
pub mod control;
pub mod environment;
mod flight;
pub mod physics;
pub mod propulsion;
mod subsystem;

pub use flight::{flight_physics_system, sync_transform_system, terrain_contact_system};
pub use physics::{IntegrationOutcome, PhysicsIntegrator};
pub use subsystem::{FlightSubsystem, Subsystem, SubsystemKind};
