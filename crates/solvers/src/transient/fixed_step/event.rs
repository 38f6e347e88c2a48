use super::Sample;

/// Event emitted by the fixed-step solver for each recorded sample.
///
/// Step 0 is the initial condition. The sample carries the state before the
/// step method advances it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// Index of the recorded sample.
    pub step: usize,

    /// Time and state of the sample.
    pub sample: Sample<N>,
}
