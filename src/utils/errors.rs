use std::io;
use thiserror::Error;

use crate::components::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Spawn error: {0}")]
    SpawnError(String),

    #[error("Invalid control input: {0}")]
    InvalidControl(String),
}
