use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use swing_solvers::{
    quadrature::{AdaptiveSimpson, ConfigError, GaussLegendre, Method, Romberg},
    transient::fixed_step::{GridError, Stepping, TimeGrid},
};

use crate::{
    error::Error,
    model::State,
    params::{ForcingParameters, PhysicalParameters},
    scenario::{MethodKind, Scenario, file_name},
};

/// Everything needed to run and write a set of pendulum simulations.
///
/// Every field has a default, so an empty TOML document yields the reference
/// setup: both scenarios, all three methods, `0 ≤ t ≤ 20` with `h = 0.01`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Directory receiving the CSV files.
    pub output_dir: PathBuf,
    pub methods: Vec<MethodKind>,
    pub scenarios: Vec<Scenario>,
    pub physical: PhysicalParameters,
    pub forcing: ForcingParameters,
    pub initial: InitialCondition,
    pub grid: GridConfig,
    pub gauss: GaussConfig,
    pub romberg: RombergConfig,
    pub adaptive: AdaptiveConfig,
}

impl SimulationConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseConfig`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadConfig`] if the file cannot be read, or
    /// [`Error::ParseConfig`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the validated time grid.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the grid settings are invalid.
    pub fn time_grid(&self) -> Result<TimeGrid, GridError> {
        let GridConfig {
            start,
            end,
            step,
            stepping,
        } = self.grid;
        Ok(TimeGrid::new(start, end, step)?.with_stepping(stepping))
    }

    /// Builds the configured step method of the given kind.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the rule settings are invalid.
    pub fn method(&self, kind: MethodKind) -> Result<Method, ConfigError> {
        Ok(match kind {
            MethodKind::Gauss => GaussLegendre::new(self.gauss.points)?.into(),
            MethodKind::Romberg => Romberg::new(self.romberg.levels)?.into(),
            MethodKind::Adaptive => {
                AdaptiveSimpson::new(self.adaptive.tolerance, self.adaptive.max_depth)?.into()
            }
        })
    }

    /// Returns the output path for one run.
    #[must_use]
    pub fn output_path(&self, method: MethodKind, scenario: Scenario) -> PathBuf {
        self.output_dir.join(file_name(method, scenario))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            methods: MethodKind::ALL.to_vec(),
            scenarios: Scenario::ALL.to_vec(),
            physical: PhysicalParameters::default(),
            forcing: ForcingParameters::default(),
            initial: InitialCondition::default(),
            grid: GridConfig::default(),
            gauss: GaussConfig::default(),
            romberg: RombergConfig::default(),
            adaptive: AdaptiveConfig::default(),
        }
    }
}

/// Initial angle (rad) and angular velocity (rad/s).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialCondition {
    pub angle: f64,
    pub angular_velocity: f64,
}

impl Default for InitialCondition {
    fn default() -> Self {
        Self {
            angle: 0.2,
            angular_velocity: 0.0,
        }
    }
}

impl From<InitialCondition> for State {
    fn from(initial: InitialCondition) -> Self {
        State::new(initial.angle, initial.angular_velocity)
    }
}

/// Time grid settings, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub stepping: Stepping,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 20.0,
            step: 0.01,
            stepping: Stepping::Indexed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaussConfig {
    pub points: usize,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self { points: 2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RombergConfig {
    pub levels: usize,
}

impl Default for RombergConfig {
    fn default() -> Self {
        Self { levels: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdaptiveConfig {
    pub tolerance: f64,
    pub max_depth: usize,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            tolerance: AdaptiveSimpson::DEFAULT_TOLERANCE,
            max_depth: AdaptiveSimpson::DEFAULT_MAX_DEPTH,
        }
    }
}
