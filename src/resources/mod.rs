mod atmosphere;
mod ground;
mod settings;
mod time;

pub use atmosphere::{isa_pressure, isa_temperature, AtmosphereModel, StandardAtmosphere};
pub use ground::{FlatTerrain, TerrainHeightProvider, TerrainResource};
pub use settings::SimulationSettings;
pub use time::FixedStepClock;
