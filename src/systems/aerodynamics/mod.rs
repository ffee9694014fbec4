mod air_data;
mod drag;
mod lift;
mod stability;

pub use air_data::{AerodynamicSampler, AirData};
pub use drag::DragSubsystem;
pub use lift::LiftSubsystem;
pub use stability::StabilitySubsystem;
