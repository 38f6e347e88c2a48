//! Quadrature rules for advancing a state over one time step.
//!
//! A [`Quadrature`] rule approximates `∫ f(τ) dτ` over `[a, b]` from sampled
//! values of `f`. The step [`Method`] turns a rule into a single-step
//! integrator by applying it to each component of a model's derivative with
//! the state frozen at the start of the step:
//!
//! ```text
//! state_i(t + h) = state_i(t) + ∫_t^{t+h} f_i(τ, state(t)) dτ
//! ```
//!
//! Only the time argument varies inside a step, so the nominal order of the
//! rule applies to the time dependence of `f` alone. With respect to the state
//! the scheme is explicit and first order in `h`.
//!
//! # Rules
//!
//! - [`GaussLegendre`]: fixed-point Gauss–Legendre, 1 to 5 points
//! - [`Romberg`]: trapezoid rule with Richardson extrapolation
//! - [`AdaptiveSimpson`]: recursive Simpson with a depth guard
//! - [`trapezoid`]: the composite trapezoid rule used by [`Romberg`]

mod adaptive;
mod error;
mod gauss;
mod method;
mod romberg;
mod trapezoid;

pub use adaptive::AdaptiveSimpson;
pub use error::{ConfigError, Error};
pub use gauss::GaussLegendre;
pub use method::{Method, advance};
pub use romberg::Romberg;
pub use trapezoid::trapezoid;

/// A rule that integrates a scalar function over a closed interval.
pub trait Quadrature {
    /// Approximates the integral of `f` over `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the rule cannot produce an estimate, such as an
    /// adaptive rule exceeding its subdivision limit.
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64;
}
