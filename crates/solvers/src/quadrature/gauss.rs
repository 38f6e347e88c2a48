use super::{ConfigError, Error, Quadrature};

/// `(node, weight)` pairs on `[-1, 1]` for 1 to 5 point rules.
const RULES: [&[(f64, f64)]; 5] = [
    &[(0.0, 2.0)],
    &[(-0.577_350_269_189_625_8, 1.0), (0.577_350_269_189_625_8, 1.0)],
    &[
        (-0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
        (0.0, 0.888_888_888_888_888_8),
        (0.774_596_669_241_483_4, 0.555_555_555_555_555_6),
    ],
    &[
        (-0.861_136_311_594_052_6, 0.347_854_845_137_453_85),
        (-0.339_981_043_584_856_3, 0.652_145_154_862_546_2),
        (0.339_981_043_584_856_3, 0.652_145_154_862_546_2),
        (0.861_136_311_594_052_6, 0.347_854_845_137_453_85),
    ],
    &[
        (-0.906_179_845_938_664, 0.236_926_885_056_189_08),
        (-0.538_469_310_105_683, 0.478_628_670_499_366_47),
        (0.0, 0.568_888_888_888_888_9),
        (0.538_469_310_105_683, 0.478_628_670_499_366_47),
        (0.906_179_845_938_664, 0.236_926_885_056_189_08),
    ],
];

/// Fixed-point Gauss–Legendre quadrature.
///
/// An `n`-point rule places its abscissas at `a + (h/2)(1 + x_i)` for the
/// Legendre roots `x_i` and integrates polynomials up to degree `2n − 1`
/// exactly. The default is the 2-point rule (`x = ∓1/√3`, unit weights).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussLegendre {
    rule: &'static [(f64, f64)],
}

impl Default for GaussLegendre {
    fn default() -> Self {
        Self { rule: RULES[1] }
    }
}

impl GaussLegendre {
    /// Creates a rule with the given number of points.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GaussPoints`] unless `points` is between 1 and 5.
    pub fn new(points: usize) -> Result<Self, ConfigError> {
        match points {
            1..=5 => Ok(Self {
                rule: RULES[points - 1],
            }),
            _ => Err(ConfigError::GaussPoints(points)),
        }
    }

    /// Returns the number of points in the rule.
    #[must_use]
    pub fn points(&self) -> usize {
        self.rule.len()
    }

    /// Returns the `(node, weight)` pairs on `[-1, 1]`.
    #[must_use]
    pub fn rule(&self) -> &'static [(f64, f64)] {
        self.rule
    }
}

impl Quadrature for GaussLegendre {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, Error>
    where
        F: Fn(f64) -> f64,
    {
        let half_width = (b - a) / 2.0;
        let weighted_sum: f64 = self
            .rule
            .iter()
            .map(|&(node, weight)| weight * f(a + half_width * (1.0 + node)))
            .sum();

        Ok(half_width * weighted_sum)
    }
}
