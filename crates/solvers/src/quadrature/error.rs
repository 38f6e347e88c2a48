use thiserror::Error;

/// Errors that can occur while evaluating a quadrature rule.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("the trapezoid rule needs at least one subinterval")]
    NoSubintervals,

    #[error("adaptive quadrature did not converge within {max_depth} subdivisions on [{a}, {b}]")]
    DepthExceeded { max_depth: usize, a: f64, b: f64 },
}

/// Errors that can occur when constructing a quadrature rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Gauss-Legendre rules are available for 1 to 5 points, got {0}")]
    GaussPoints(usize),

    #[error("Romberg extrapolation levels must be between 1 and {max}, got {got}")]
    RombergLevels { got: usize, max: usize },

    #[error("tolerance must be finite and positive")]
    Tolerance,
}
