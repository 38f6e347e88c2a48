/// A recorded point of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<const N: usize> {
    /// The independent variable (time).
    pub time: f64,

    /// The state at `time`.
    pub state: [f64; N],
}

/// Lifecycle of a [`Simulation`](super::Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, nothing recorded yet.
    Initialized,

    /// At least one sample recorded and the grid is not exhausted.
    Running,

    /// The next time lies past the end of the grid.
    Finished,
}

/// The result of a fixed-step run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// Samples in increasing time order, starting with the initial condition.
    pub samples: Vec<Sample<N>>,
}

impl<const N: usize> Solution<N> {
    /// Returns the number of recorded samples, one per simulated step.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the last recorded sample.
    #[must_use]
    pub fn last(&self) -> Option<&Sample<N>> {
        self.samples.last()
    }
}
