use std::{io, path::PathBuf};

use swing_solvers::{
    quadrature::ConfigError,
    transient::fixed_step::{self, GridError},
};
use thiserror::Error;

use crate::{params::ParameterError, sink::ReadError};

/// Errors that can occur while configuring, running, or storing a simulation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config `{}`: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("invalid pendulum parameters: {0}")]
    Parameters(#[from] ParameterError),

    #[error("invalid time grid: {0}")]
    Grid(#[from] GridError),

    #[error("invalid step method: {0}")]
    Method(#[from] ConfigError),

    #[error("integration failed: {0}")]
    Solver(#[from] fixed_step::Error),

    #[error("failed to write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read trajectory `{}`: {source}", .path.display())]
    ReadTrajectory {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}
