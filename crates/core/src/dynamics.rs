/// A model that computes the time derivative of an `N`-component state.
///
/// Implementations must be pure: the derivative depends only on `t`, `state`,
/// and parameters frozen when the model was built. This lets a solver call
/// the model at any number of sub-points within a step, and lets independent
/// runs share a model across threads.
///
/// Any closure `Fn(f64, &[f64; N]) -> [f64; N]` is a `Dynamics<N>`, which is
/// convenient for tests and one-off systems.
pub trait Dynamics<const N: usize> {
    /// Returns the rate of change of each state component at time `t`.
    fn derivative(&self, t: f64, state: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> Dynamics<N> for F
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn derivative(&self, t: f64, state: &[f64; N]) -> [f64; N] {
        self(t, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Exponential decay with a fixed rate.
    struct Decay {
        rate: f64,
    }

    impl Dynamics<1> for Decay {
        fn derivative(&self, _t: f64, state: &[f64; 1]) -> [f64; 1] {
            [-self.rate * state[0]]
        }
    }

    fn evaluate<D: Dynamics<N>, const N: usize>(dynamics: D, t: f64, state: [f64; N]) -> [f64; N] {
        dynamics.derivative(t, &state)
    }

    #[test]
    fn struct_dynamics() {
        let decay = Decay { rate: 0.5 };
        let [dy] = decay.derivative(0.0, &[4.0]);
        assert_relative_eq!(dy, -2.0);
    }

    #[test]
    fn closure_dynamics() {
        // Harmonic oscillator with unit stiffness and mass.
        let oscillator = |_t: f64, y: &[f64; 2]| [y[1], -y[0]];

        let [dx, dv] = evaluate(oscillator, 0.0, [2.0, 1.0]);
        assert_relative_eq!(dx, 1.0);
        assert_relative_eq!(dv, -2.0);
    }

    #[test]
    fn time_dependent_closure() {
        let forcing = |t: f64, _y: &[f64; 1]| [t.cos()];

        let [dy] = evaluate(forcing, 0.0, [0.0]);
        assert_relative_eq!(dy, 1.0);

        let [dy] = evaluate(forcing, std::f64::consts::PI, [0.0]);
        assert_relative_eq!(dy, -1.0);
    }
}
