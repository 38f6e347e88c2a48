//! Fixed-step solver for time-dependent models.
//!
//! The solver records the current sample, then advances the state by one step
//! with a quadrature rule, until the time grid is exhausted:
//!
//! ```text
//! record (t_n, y_n)
//! y_{n+1} = y_n + ∫_{t_n}^{t_n+h} f(τ, y_n) dτ
//! ```
//!
//! The state advanced past the end of the grid is never recorded, so a run
//! over `n` grid points produces exactly `n` samples and the first one is the
//! initial condition. See [`Stepping`] for how grid times are generated.
//!
//! # Example
//!
//! ```
//! use swing_solvers::quadrature::Method;
//! use swing_solvers::transient::fixed_step::{self, TimeGrid};
//!
//! let decay = |_t: f64, y: &[f64; 1]| [-y[0]];
//! let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();
//!
//! let solution = fixed_step::solve_unobserved(&decay, &Method::default(), [1.0], grid).unwrap();
//!
//! assert_eq!(solution.len(), 11);
//! assert_eq!(solution.samples[0].state, [1.0]);
//! ```

mod error;
mod event;
mod grid;
mod solution;

pub use error::Error;
pub use event::Event;
pub use grid::{GridError, Stepping, TimeGrid};
pub use solution::{Phase, Sample, Solution};

use swing_core::{Dynamics, Observer};

use crate::quadrature::{self, Quadrature};

/// Upper bound on samples reserved up front; longer runs grow as they record.
const MAX_PREALLOCATED: usize = 1 << 16;

/// An in-progress fixed-step run.
///
/// A simulation moves through [`Phase::Initialized`], [`Phase::Running`], and
/// [`Phase::Finished`]. Each call to [`Simulation::advance`] records one
/// sample and steps the state; [`Simulation::finish`] hands back the samples.
#[derive(Debug)]
pub struct Simulation<'a, D, Q, const N: usize> {
    dynamics: &'a D,
    rule: &'a Q,
    grid: TimeGrid,
    state: [f64; N],
    time: f64,
    index: usize,
    phase: Phase,
    samples: Vec<Sample<N>>,
}

impl<'a, D, Q, const N: usize> Simulation<'a, D, Q, N>
where
    D: Dynamics<N>,
    Q: Quadrature,
{
    /// Creates a simulation at the start of `grid` with the given state.
    #[must_use]
    pub fn new(dynamics: &'a D, rule: &'a Q, initial: [f64; N], grid: TimeGrid) -> Self {
        Self {
            dynamics,
            rule,
            grid,
            state: initial,
            time: grid.start(),
            index: 0,
            phase: Phase::Initialized,
            samples: Vec::with_capacity(grid.indexed_len().min(MAX_PREALLOCATED)),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the time of the next sample.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the state at [`Simulation::time`].
    #[must_use]
    pub fn state(&self) -> &[f64; N] {
        &self.state
    }

    /// Returns the samples recorded so far.
    #[must_use]
    pub fn samples(&self) -> &[Sample<N>] {
        &self.samples
    }

    /// Records the current sample and advances the state by one step.
    ///
    /// Returns the event for the recorded sample, or `None` once the
    /// simulation is [`Phase::Finished`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the step method fails. Nothing is recorded, and
    /// the phase, time, and state are left as they were.
    pub fn advance(&mut self) -> Result<Option<Event<N>>, Error> {
        if self.phase == Phase::Finished || !self.grid.contains(self.index, self.time) {
            self.phase = Phase::Finished;
            return Ok(None);
        }

        let event = Event {
            step: self.index,
            sample: Sample {
                time: self.time,
                state: self.state,
            },
        };

        quadrature::advance(
            self.rule,
            self.dynamics,
            self.time,
            self.grid.step(),
            &mut self.state,
        )
        .map_err(|source| Error::Quadrature {
            time: self.time,
            source,
        })?;

        self.samples.push(event.sample);
        self.phase = Phase::Running;
        self.index += 1;
        self.time = self.grid.time_at(self.index, self.time);
        if !self.grid.contains(self.index, self.time) {
            self.phase = Phase::Finished;
        }

        Ok(Some(event))
    }

    /// Consumes the simulation and returns the recorded samples.
    #[must_use]
    pub fn finish(self) -> Solution<N> {
        Solution {
            samples: self.samples,
        }
    }
}

/// Integrates a model over a time grid with a fixed step.
///
/// # Algorithm
///
/// 1. Start at `grid.start()` with the `initial` state.
/// 2. While the current time is on the grid:
///    - Record the current sample and emit an [`Event`] to the observer.
///    - Advance the state with `rule`, holding the state fixed within the step.
///    - Move to the next grid time.
/// 3. Return the solution with every recorded sample.
///
/// The run always completes the grid unless the rule fails.
///
/// # Errors
///
/// Returns an [`Error`] if the rule fails at any step.
pub fn solve<D, Q, Obs, const N: usize>(
    dynamics: &D,
    rule: &Q,
    initial: [f64; N],
    grid: TimeGrid,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    D: Dynamics<N>,
    Q: Quadrature,
    Obs: Observer<Event<N>>,
{
    let mut simulation = Simulation::new(dynamics, rule, initial, grid);

    while let Some(event) = simulation.advance()? {
        observer.observe(&event);
    }

    Ok(simulation.finish())
}

/// Integrates a model over a time grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an [`Error`] if the rule fails at any step.
pub fn solve_unobserved<D, Q, const N: usize>(
    dynamics: &D,
    rule: &Q,
    initial: [f64; N],
    grid: TimeGrid,
) -> Result<Solution<N>, Error>
where
    D: Dynamics<N>,
    Q: Quadrature,
{
    solve(dynamics, rule, initial, grid, ())
}
