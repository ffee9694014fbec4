mod aircraft;
mod physics;

pub use aircraft::AircraftPlugin;
pub use physics::{FlightPhysicsPlugin, FlightSet};
