//! Side-by-side views of finished runs.
//!
//! A [`Comparison`] reads the trajectory files that [`run_all`] wrote and
//! groups them into the series of the comparison figure:
//! - the angle over time for each scenario, one series per method;
//! - a phase portrait (angle against angular velocity) for each method.
//!
//! [`run_all`]: crate::run_all

use std::io;

use crate::{
    config::SimulationConfig,
    error::Error,
    scenario::{MethodKind, Scenario},
    sink::{self, ReadError},
    trajectory::Trajectory,
};

/// A named polyline of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// The trajectories available for comparison, in run order.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    runs: Vec<(MethodKind, Scenario, Trajectory)>,
}

impl Comparison {
    /// Reads every configured run from [`SimulationConfig::output_path`].
    ///
    /// Missing files are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadTrajectory`] if a file exists but cannot be read
    /// or parsed.
    pub fn load(config: &SimulationConfig) -> Result<Self, Error> {
        let mut comparison = Self::default();

        for &scenario in &config.scenarios {
            for &method in &config.methods {
                let path = config.output_path(method, scenario);

                match sink::read_csv(&path) {
                    Ok(trajectory) => comparison.insert(method, scenario, trajectory),
                    Err(Error::ReadTrajectory {
                        source: ReadError::Io(err),
                        ..
                    }) if err.kind() == io::ErrorKind::NotFound => {
                        log::warn!("`{}` not found, skipping", path.display());
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        log::debug!("loaded {} trajectories for comparison", comparison.len());
        Ok(comparison)
    }

    /// Adds a run, replacing any earlier run of the same pair.
    pub fn insert(&mut self, method: MethodKind, scenario: Scenario, trajectory: Trajectory) {
        self.runs.retain(|&(kept_method, kept_scenario, _)| {
            (kept_method, kept_scenario) != (method, scenario)
        });
        self.runs.push((method, scenario, trajectory));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    #[must_use]
    pub fn trajectory(&self, method: MethodKind, scenario: Scenario) -> Option<&Trajectory> {
        self.runs
            .iter()
            .find(|&&(kept_method, kept_scenario, _)| {
                kept_method == method && kept_scenario == scenario
            })
            .map(|(_, _, trajectory)| trajectory)
    }

    /// Returns `(t, θ)` for every loaded method in `scenario`, labeled by method.
    #[must_use]
    pub fn angle_series(&self, scenario: Scenario) -> Vec<Series> {
        MethodKind::ALL
            .into_iter()
            .filter_map(|method| {
                let trajectory = self.trajectory(method, scenario)?;
                Some(Series {
                    label: method.to_string(),
                    points: trajectory
                        .points()
                        .iter()
                        .map(|point| [point.time, point.angle])
                        .collect(),
                })
            })
            .collect()
    }

    /// Returns `(θ, ω)` for every loaded method in `scenario`, labeled
    /// `<method> (<scenario>)`.
    #[must_use]
    pub fn phase_portraits(&self, scenario: Scenario) -> Vec<Series> {
        MethodKind::ALL
            .into_iter()
            .filter_map(|method| {
                let trajectory = self.trajectory(method, scenario)?;
                Some(Series {
                    label: format!("{method} ({scenario})"),
                    points: trajectory
                        .points()
                        .iter()
                        .map(|point| [point.angle, point.angular_velocity])
                        .collect(),
                })
            })
            .collect()
    }
}
