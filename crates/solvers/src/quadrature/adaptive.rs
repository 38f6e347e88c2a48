use super::{ConfigError, Error, Quadrature};

/// Recursive adaptive Simpson quadrature with a Richardson correction.
///
/// On each interval `[a, b]` with midpoint `c` the rule compares one Simpson
/// parabola over the whole interval (`coarse`) against two parabolas over the
/// halves (`fine`). The error estimate is `|fine − coarse| / 15`. When it is
/// below the tolerance the interval returns `fine + (fine − coarse) / 15`;
/// otherwise both halves are integrated with half the tolerance and summed.
///
/// Recursion is limited to `max_depth` subdivisions below the starting
/// interval. An interval that still fails the tolerance at that depth makes
/// the whole integration fail with [`Error::DepthExceeded`] rather than
/// returning a partially refined estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSimpson {
    tolerance: f64,
    max_depth: usize,
}

impl AdaptiveSimpson {
    /// Tolerance used by [`AdaptiveSimpson::default`].
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Subdivision limit used by [`AdaptiveSimpson::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 50;

    /// Creates an adaptive rule with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tolerance` is not finite and
    /// positive.
    pub fn new(tolerance: f64, max_depth: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_depth,
        })
    }

    /// Returns the error tolerance for the whole interval.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of subdivisions.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn refine<F>(&self, f: &F, a: f64, b: f64, tolerance: f64, depth: usize) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        let width = b - a;
        let mid = (a + b) / 2.0;

        let (fa, fm, fb) = (f(a), f(mid), f(b));
        let coarse = (width / 6.0) * (fa + 4.0 * fm + fb);
        let fine = (width / 12.0)
            * (fa + 4.0 * f((a + mid) / 2.0) + 2.0 * fm + 4.0 * f((mid + b) / 2.0) + fb);

        let error = (fine - coarse).abs() / 15.0;
        if error < tolerance {
            return Ok(fine + (fine - coarse) / 15.0);
        }

        if depth >= self.max_depth {
            return Err(Error::DepthExceeded {
                max_depth: self.max_depth,
                a,
                b,
            });
        }

        let left = self.refine(f, a, mid, tolerance / 2.0, depth + 1)?;
        let right = self.refine(f, mid, b, tolerance / 2.0, depth + 1)?;
        Ok(left + right)
    }
}

impl Default for AdaptiveSimpson {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl Quadrature for AdaptiveSimpson {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        self.refine(&f, a, b, self.tolerance, 0)
    }
}
