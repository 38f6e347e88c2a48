use std::{fs, path::PathBuf};

use swing_solvers::transient::fixed_step::{self, Event};

use crate::{
    config::SimulationConfig,
    error::Error,
    model::{Pendulum, State},
    scenario::{MethodKind, Scenario},
    sink,
    trajectory::Trajectory,
};

/// The outcome of one scenario and method pair in [`run_all`].
#[derive(Debug)]
pub struct RunReport {
    pub method: MethodKind,
    pub scenario: Scenario,

    /// Destination of the trajectory file.
    pub path: PathBuf,

    /// Number of points written, or the reason the run failed.
    pub outcome: Result<usize, Error>,
}

impl RunReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Simulates one scenario with one method.
///
/// Each call builds its own model, so the forcing of one run never leaks into
/// another.
///
/// # Errors
///
/// Returns an [`Error`] if the configuration is invalid for this run or the
/// step method fails.
pub fn run(
    config: &SimulationConfig,
    method: MethodKind,
    scenario: Scenario,
) -> Result<Trajectory, Error> {
    let pendulum = Pendulum::new(config.physical, scenario.forcing(config.forcing))?;
    let rule = config.method(method)?;
    let grid = config.time_grid()?;
    let initial: [f64; 2] = State::from(config.initial).into();

    log::info!("running {scenario} with {method}");

    let solution = fixed_step::solve(
        &pendulum,
        &rule,
        initial,
        grid,
        |event: &Event<2>| {
            let [angle, angular_velocity] = event.sample.state;
            log::trace!(
                "{scenario}/{method} step {}: t = {:.4}, theta = {angle:.8}, omega = {angular_velocity:.8}",
                event.step,
                event.sample.time,
            );
        },
    )?;

    log::debug!(
        "{scenario}/{method} recorded {} samples up to t = {}",
        solution.len(),
        solution.last().map_or(grid.start(), |sample| sample.time),
    );

    Ok(solution.into())
}

/// Runs every configured scenario with every configured method and writes
/// each trajectory to [`SimulationConfig::output_path`].
///
/// Scenarios are the outer loop. A failed run is logged and reported without
/// stopping the remaining runs.
pub fn run_all(config: &SimulationConfig) -> Vec<RunReport> {
    if let Err(err) = fs::create_dir_all(&config.output_dir) {
        log::warn!(
            "could not create output directory `{}`: {err}",
            config.output_dir.display()
        );
    }

    let mut reports = Vec::with_capacity(config.scenarios.len() * config.methods.len());

    for &scenario in &config.scenarios {
        for &method in &config.methods {
            let path = config.output_path(method, scenario);

            let outcome = run(config, method, scenario).and_then(|trajectory| {
                sink::write_csv(&trajectory, &path)?;
                Ok(trajectory.len())
            });

            match &outcome {
                Ok(points) => log::info!("wrote {points} points to `{}`", path.display()),
                Err(err) => log::error!("{scenario} with {method} failed: {err}"),
            }

            reports.push(RunReport {
                method,
                scenario,
                path,
                outcome,
            });
        }
    }

    reports
}
