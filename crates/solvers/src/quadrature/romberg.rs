use super::{ConfigError, Error, Quadrature, trapezoid};

/// Romberg integration: the trapezoid rule with Richardson extrapolation.
///
/// Row `i` of the tableau starts from the trapezoid rule with `2^i`
/// subintervals, and each extrapolation removes the next even-order error term:
///
/// ```text
/// R[i][j] = (4^j · R[i][j−1] − R[i−1][j−1]) / (4^j − 1)
/// ```
///
/// With the default single level this is `(4·I₂ − I₁) / 3`, where `I₁` and
/// `I₂` use one and two subintervals. That estimate equals Simpson's rule and
/// is exact for cubics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Romberg {
    levels: usize,
}

impl Romberg {
    /// Largest number of extrapolation levels accepted by [`Romberg::new`].
    pub const MAX_LEVELS: usize = 20;

    /// Creates a Romberg rule with the given number of extrapolation levels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RombergLevels`] unless `levels` is between 1 and
    /// [`Romberg::MAX_LEVELS`].
    pub fn new(levels: usize) -> Result<Self, ConfigError> {
        if levels == 0 || levels > Self::MAX_LEVELS {
            return Err(ConfigError::RombergLevels {
                got: levels,
                max: Self::MAX_LEVELS,
            });
        }
        Ok(Self { levels })
    }

    /// Returns the number of extrapolation levels.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.levels
    }
}

impl Default for Romberg {
    fn default() -> Self {
        Self { levels: 1 }
    }
}

impl Quadrature for Romberg {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        let mut previous = vec![trapezoid(&f, a, b, 1)?];

        for level in 1..=self.levels {
            let mut row = Vec::with_capacity(level + 1);
            row.push(trapezoid(&f, a, b, 1 << level)?);

            let mut factor = 1.0;
            for j in 1..=level {
                factor *= 4.0;
                let extrapolated = (factor * row[j - 1] - previous[j - 1]) / (factor - 1.0);
                row.push(extrapolated);
            }

            previous = row;
        }

        Ok(previous[self.levels])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_level_matches_richardson_formula() {
        let f = |x: f64| (2.0 * x).cos() + x;
        let (a, b) = (0.3, 0.31);

        let i1 = trapezoid(f, a, b, 1).unwrap();
        let i2 = trapezoid(f, a, b, 2).unwrap();
        let expected = (4.0 * i2 - i1) / 3.0;

        let result = Romberg::default().integrate(f, a, b).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn single_level_is_exact_for_cubics() {
        let f = |x: f64| x * x * x - 2.0 * x + 1.0;

        // ∫_0^2 (x³ − 2x + 1) dx = 4 − 4 + 2 = 2
        let result = Romberg::default().integrate(f, 0.0, 2.0).unwrap();
        assert_relative_eq!(result, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn more_levels_improve_accuracy() {
        let exact = std::f64::consts::E - 1.0;

        let one = Romberg::new(1).unwrap().integrate(f64::exp, 0.0, 1.0).unwrap();
        let five = Romberg::new(5).unwrap().integrate(f64::exp, 0.0, 1.0).unwrap();

        assert!((five - exact).abs() < (one - exact).abs());
        assert_relative_eq!(five, exact, epsilon = 1e-12);
    }

    #[test]
    fn invalid_levels() {
        assert_eq!(
            Romberg::new(0),
            Err(ConfigError::RombergLevels { got: 0, max: 20 })
        );
        assert!(Romberg::new(21).is_err());
        assert_eq!(Romberg::new(20).unwrap().levels(), 20);
    }
}
