use thiserror::Error;

/// Smallest allowance for rounding in `(end − start) / step` when counting
/// indexed samples. Larger quotients get a proportional allowance.
const BOUNDARY_SLACK: f64 = 1e-9;

/// Relative allowance, in units of the quotient `(end − start) / step`.
const RELATIVE_SLACK: f64 = 4.0 * f64::EPSILON;

/// How the driver generates sample times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Stepping {
    /// Times are `start + i·step` for `i = 0..=floor((end − start) / step)`.
    ///
    /// The end time is included when it falls on the grid, independent of
    /// floating-point accumulation.
    #[default]
    Indexed,

    /// Times are produced by repeatedly adding `step`, recording while the
    /// accumulated time is `<= end`.
    ///
    /// Whether the end time is included depends on rounding in the running
    /// sum. For `start = 0, end = 20, step = 0.01` the sum overshoots and the
    /// run records 2000 samples instead of 2001.
    Accumulated,
}

/// Errors that can occur when validating a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("start, end, and step must be finite")]
    NonFinite,

    #[error("step must be positive")]
    NonPositiveStep,

    #[error("end must not be before start")]
    EndBeforeStart,

    #[error("the grid has more samples than can be indexed")]
    TooManySamples,
}

/// The validated time grid of a fixed-step run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    step: f64,
    stepping: Stepping,
    indexed_len: usize,
}

impl TimeGrid {
    /// Creates a grid using [`Stepping::Indexed`].
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if any value is non-finite, `step <= 0`,
    /// `end < start`, or the sample count does not fit in a `usize`.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, GridError> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(GridError::NonFinite);
        }
        if step <= 0.0 {
            return Err(GridError::NonPositiveStep);
        }
        if end < start {
            return Err(GridError::EndBeforeStart);
        }

        let quotient = (end - start) / step;
        let intervals = (quotient + BOUNDARY_SLACK.max(quotient * RELATIVE_SLACK)).floor();
        if intervals >= usize::MAX as f64 {
            return Err(GridError::TooManySamples);
        }
        let indexed_len = (intervals as usize)
            .checked_add(1)
            .ok_or(GridError::TooManySamples)?;

        Ok(Self {
            start,
            end,
            step,
            stepping: Stepping::Indexed,
            indexed_len,
        })
    }

    /// Returns this grid with a different stepping policy.
    #[must_use]
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Returns the start time.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the end time.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the stepping policy.
    #[must_use]
    pub fn stepping(&self) -> Stepping {
        self.stepping
    }

    /// Returns the number of samples recorded under [`Stepping::Indexed`].
    ///
    /// Under [`Stepping::Accumulated`] the actual count may be one less.
    #[must_use]
    pub fn indexed_len(&self) -> usize {
        self.indexed_len
    }

    /// Returns whether the sample at `index`, reached at `time`, is recorded.
    pub(crate) fn contains(&self, index: usize, time: f64) -> bool {
        match self.stepping {
            Stepping::Indexed => index < self.indexed_len,
            Stepping::Accumulated => time <= self.end,
        }
    }

    /// Returns the time of sample `index`, given the previous sample time.
    pub(crate) fn time_at(&self, index: usize, previous: f64) -> f64 {
        match self.stepping {
            Stepping::Indexed => self.start + index as f64 * self.step,
            Stepping::Accumulated => previous + self.step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn accumulated_len(grid: &TimeGrid) -> usize {
        let grid = grid.with_stepping(Stepping::Accumulated);
        let (mut index, mut time) = (0, grid.start());
        while grid.contains(index, time) {
            index += 1;
            time = grid.time_at(index, time);
        }
        index
    }

    #[test]
    fn reference_horizon_counts() {
        let grid = TimeGrid::new(0.0, 20.0, 0.01).unwrap();

        assert_eq!(grid.stepping(), Stepping::Indexed);
        assert_eq!(grid.indexed_len(), 2001);
        assert_eq!(accumulated_len(&grid), 2000);
    }

    #[test]
    fn zero_length_horizon_has_one_sample() {
        let grid = TimeGrid::new(0.0, 0.0, 0.01).unwrap();

        assert_eq!(grid.indexed_len(), 1);
        assert_eq!(accumulated_len(&grid), 1);
    }

    #[test]
    fn partial_final_step_is_excluded() {
        let grid = TimeGrid::new(0.0, 1.05, 0.1).unwrap();
        assert_eq!(grid.indexed_len(), 11);
    }

    #[test]
    fn indexed_times_do_not_accumulate_rounding() {
        let grid = TimeGrid::new(0.0, 20.0, 0.01).unwrap();
        assert_relative_eq!(grid.time_at(2000, f64::NAN), 20.0);
        assert_relative_eq!(grid.time_at(1, f64::NAN), 0.01);
    }

    #[test]
    fn large_grid_keeps_its_end_point() {
        // `10000000.02 / 0.01` rounds to just below 1_000_000_002.
        let grid = TimeGrid::new(0.0, 10_000_000.02, 0.01).unwrap();
        assert_eq!(grid.indexed_len(), 1_000_000_003);
    }

    #[test]
    fn unindexable_grids_are_rejected() {
        assert_eq!(
            TimeGrid::new(0.0, 1e300, 1e-300),
            Err(GridError::TooManySamples)
        );
        assert_eq!(
            TimeGrid::new(-1e308, 1e308, 1.0),
            Err(GridError::TooManySamples)
        );
        assert!(TimeGrid::new(0.0, 1e13, 1e-3).is_ok());
    }

    #[test]
    fn invalid_grids() {
        assert_eq!(TimeGrid::new(f64::NAN, 1.0, 0.1), Err(GridError::NonFinite));
        assert_eq!(
            TimeGrid::new(0.0, f64::INFINITY, 0.1),
            Err(GridError::NonFinite)
        );
        assert_eq!(TimeGrid::new(0.0, 1.0, 0.0), Err(GridError::NonPositiveStep));
        assert_eq!(TimeGrid::new(0.0, 1.0, -0.1), Err(GridError::NonPositiveStep));
        assert_eq!(TimeGrid::new(1.0, 0.0, 0.1), Err(GridError::EndBeforeStart));
    }
}
