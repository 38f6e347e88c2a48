//! Core traits shared by the Swing solvers and models.
//!
//! This crate defines the abstractions that solvers and models build on:
//!
//! - [`Dynamics`]: a pure derivative model over an `N`-component state
//! - [`Observer`]: receives solver events as they happen

mod dynamics;
mod observer;

pub use dynamics::Dynamics;
pub use observer::Observer;
