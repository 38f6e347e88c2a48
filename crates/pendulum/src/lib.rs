//! Damped, driven pendulum simulations.
//!
//! Each run integrates the [`Pendulum`] over a fixed time grid with one of the
//! quadrature step methods from `swing-solvers`, then writes the trajectory as
//! CSV. [`run_all`] executes every configured scenario and method pair.
//!
//! ```no_run
//! use swing_pendulum::{SimulationConfig, run_all};
//!
//! let reports = run_all(&SimulationConfig::default());
//! assert!(reports.iter().all(|report| report.is_ok()));
//! ```
//!
//! A [`Comparison`] reads the written files back and arranges them as angle
//! and phase-portrait series.
//!
//! # Features
//!
//! - `plot`: enables [`plot::show`], an egui window with the comparison
//!   figure, and the `swing-plot` binary. This feature adds dependencies on
//!   `eframe` and `egui_plot`.

mod compare;
mod config;
mod error;
mod model;
mod params;
mod runner;
mod scenario;
mod trajectory;

pub mod sink;

#[cfg(feature = "plot")]
pub mod plot;

pub use compare::{Comparison, Series};
pub use config::{
    AdaptiveConfig, GaussConfig, GridConfig, InitialCondition, RombergConfig, SimulationConfig,
};
pub use error::Error;
pub use model::{Pendulum, State};
pub use params::{Damping, ForcingParameters, ParameterError, PhysicalParameters};
pub use runner::{RunReport, run, run_all};
pub use scenario::{MethodKind, Scenario, file_name};
pub use trajectory::{Point, Trajectory};
