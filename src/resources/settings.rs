use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::ConfigError;
use crate::utils::{DEFAULT_MAX_SUBSTEPS, DEFAULT_TIMESTEP};

/// Global simulation timing.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Fixed physics step (s).
    pub timestep: f64,
    /// Most fixed steps run for a single rendered frame.
    pub max_substeps: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

impl SimulationSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let settings: Self = serde_yaml::from_reader(file)?;
        settings.validated()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ValidationError(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
