use thiserror::Error;

use crate::quadrature;

/// Errors that can occur during fixed-step integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("step starting at t = {time} failed: {source}")]
    Quadrature {
        time: f64,
        #[source]
        source: quadrature::Error,
    },
}
