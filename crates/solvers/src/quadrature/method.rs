use swing_core::Dynamics;

use super::{AdaptiveSimpson, Error, GaussLegendre, Quadrature, Romberg};

/// A single-step integration method backed by a quadrature rule.
///
/// Each variant holds its rule's configuration and nothing else, so one
/// `Method` can be reused across steps and across independent runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Fixed-point Gauss–Legendre quadrature.
    Gauss(GaussLegendre),

    /// Trapezoid rule with Richardson extrapolation.
    Romberg(Romberg),

    /// Recursive adaptive Simpson quadrature.
    ///
    /// The tolerance controls refinement within a step only; it never changes
    /// the step size chosen by the driver.
    Adaptive(AdaptiveSimpson),
}

impl Method {
    /// Advances `state` by one step of size `dt` starting at time `t`.
    ///
    /// See [`advance`] for how the rule is applied.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the rule fails for any state component, in
    /// which case `state` is left unchanged.
    pub fn advance<D, const N: usize>(
        &self,
        dynamics: &D,
        t: f64,
        dt: f64,
        state: &mut [f64; N],
    ) -> Result<(), Error>
    where
        D: Dynamics<N>,
    {
        advance(self, dynamics, t, dt, state)
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::Gauss(GaussLegendre::default())
    }
}

impl Quadrature for Method {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Gauss(rule) => rule.integrate(f, a, b),
            Self::Romberg(rule) => rule.integrate(f, a, b),
            Self::Adaptive(rule) => rule.integrate(f, a, b),
        }
    }
}

impl From<GaussLegendre> for Method {
    fn from(rule: GaussLegendre) -> Self {
        Self::Gauss(rule)
    }
}

impl From<Romberg> for Method {
    fn from(rule: Romberg) -> Self {
        Self::Romberg(rule)
    }
}

impl From<AdaptiveSimpson> for Method {
    fn from(rule: AdaptiveSimpson) -> Self {
        Self::Adaptive(rule)
    }
}

/// Advances `state` over `[t, t + dt]` using `rule` on each component.
///
/// Component `i` gains `∫_t^{t+dt} f_i(τ, state₀) dτ`, where `f` is the model
/// derivative and `state₀` is the state at the start of the step. Every
/// component is integrated independently against the same frozen state before
/// any of them is updated.
///
/// # Errors
///
/// Returns the first rule [`Error`]. The state is only written once every
/// component has been integrated, so a failed step leaves it unchanged.
pub fn advance<Q, D, const N: usize>(
    rule: &Q,
    dynamics: &D,
    t: f64,
    dt: f64,
    state: &mut [f64; N],
) -> Result<(), Error>
where
    Q: Quadrature,
    D: Dynamics<N>,
{
    let frozen = *state;
    let mut increments = [0.0; N];

    for (i, increment) in increments.iter_mut().enumerate() {
        *increment = rule.integrate(|tau| dynamics.derivative(tau, &frozen)[i], t, t + dt)?;
    }

    for (value, increment) in state.iter_mut().zip(increments) {
        *value += increment;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn all_methods() -> [Method; 3] {
        [
            Method::Gauss(GaussLegendre::default()),
            Method::Romberg(Romberg::default()),
            Method::Adaptive(AdaptiveSimpson::default()),
        ]
    }

    /// Driven, damped pendulum with the reference parameters.
    fn pendulum(t: f64, y: &[f64; 2]) -> [f64; 2] {
        [
            y[1],
            0.5 * (2.0 * t).cos() - (0.1 / 0.2) * y[1] - 9.81 * y[0].sin(),
        ]
    }

    #[test]
    fn constant_rate_gives_linear_update() {
        // With no forcing, damping, or gravity the angle changes at a fixed rate.
        let free = |_t: f64, y: &[f64; 2]| [y[1], 0.0];
        let (t, h) = (0.37, 0.01);

        for method in all_methods() {
            let mut state = [0.2, 0.75];
            method.advance(&free, t, h, &mut state).unwrap();

            assert_relative_eq!(state[0], 0.2 + 0.75 * h, epsilon = 1e-15);
            assert_relative_eq!(state[1], 0.75);
        }
    }

    #[test]
    fn gauss_two_point_update() {
        let (t, h) = (1.0, 0.01);
        let y0 = [0.2, -0.1];

        let x = 1.0 / 3.0_f64.sqrt();
        let t1 = t + (h / 2.0) * (1.0 - x);
        let t2 = t + (h / 2.0) * (1.0 + x);
        let [a1, b1] = pendulum(t1, &y0);
        let [a2, b2] = pendulum(t2, &y0);

        let mut state = y0;
        Method::default().advance(&pendulum, t, h, &mut state).unwrap();

        assert_relative_eq!(state[0], y0[0] + (h / 2.0) * (a1 + a2), epsilon = 1e-15);
        assert_relative_eq!(state[1], y0[1] + (h / 2.0) * (b1 + b2), epsilon = 1e-15);
    }

    #[test]
    fn state_is_frozen_within_a_step() {
        // If later components saw updated values, the angle rate would change.
        let coupled = |_t: f64, y: &[f64; 2]| [y[1], 1.0];

        for method in all_methods() {
            let mut state = [0.0, 2.0];
            method.advance(&coupled, 0.0, 0.5, &mut state).unwrap();

            assert_relative_eq!(state[0], 1.0, epsilon = 1e-14);
            assert_relative_eq!(state[1], 2.5, epsilon = 1e-14);
        }
    }

    #[test]
    fn gauss_and_romberg_agree_to_third_order() {
        let h = 0.01;
        let y0 = [0.2, 0.0];

        for t in [0.0, 1.3, 7.9] {
            let mut gauss = y0;
            let mut romberg = y0;
            Method::default().advance(&pendulum, t, h, &mut gauss).unwrap();
            Method::Romberg(Romberg::default())
                .advance(&pendulum, t, h, &mut romberg)
                .unwrap();

            // A high-resolution rule on the same frozen-state integrand.
            let mut reference = y0;
            advance(&Romberg::new(8).unwrap(), &pendulum, t, h, &mut reference).unwrap();

            for i in 0..2 {
                assert_abs_diff_eq!(gauss[i], romberg[i], epsilon = h.powi(3));
                assert_abs_diff_eq!(gauss[i], reference[i], epsilon = h.powi(3));
                assert_abs_diff_eq!(romberg[i], reference[i], epsilon = h.powi(3));
            }
        }
    }

    #[test]
    fn failed_step_leaves_state_unchanged() {
        let rule = AdaptiveSimpson::new(1e-300, 2).unwrap();
        let mut state = [0.2, 0.3];

        let result = Method::from(rule).advance(&pendulum, 0.0, 0.5, &mut state);

        assert!(matches!(result, Err(Error::DepthExceeded { .. })));
        assert_eq!(state, [0.2, 0.3]);
    }

    #[test]
    fn methods_convert_from_rules() {
        assert_eq!(
            Method::from(GaussLegendre::new(3).unwrap()),
            Method::Gauss(GaussLegendre::new(3).unwrap())
        );
        assert_eq!(
            Method::from(Romberg::default()),
            Method::Romberg(Romberg::default())
        );
        assert_eq!(
            Method::from(AdaptiveSimpson::default()),
            Method::Adaptive(AdaptiveSimpson::default())
        );
    }
}
