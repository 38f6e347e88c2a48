//! Solvers for transient problems: marching a model forward in time.
//!
//! # Solvers
//!
//! - [`fixed_step`]: fixed step size with a pluggable quadrature
//!   [`Method`](crate::quadrature::Method)

pub mod fixed_step;
