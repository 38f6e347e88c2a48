//! Numerical solvers for the Swing framework.
//!
//! - [`quadrature`]: rules that integrate a scalar function of time over an
//!   interval, and the step [`Method`](quadrature::Method) that applies a rule
//!   to every component of a [`Dynamics`](swing_core::Dynamics) model
//! - [`transient`]: drivers that march a model forward in time

pub mod quadrature;
pub mod transient;
