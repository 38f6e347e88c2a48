use super::Error;

/// Composite trapezoid rule with `n` equal subintervals on `[a, b]`.
///
/// ```text
/// step · (f(a) + f(b) + 2·Σ_{i=1}^{n-1} f(a + i·step)) / 2,   step = (b − a) / n
/// ```
///
/// # Errors
///
/// Returns [`Error::NoSubintervals`] if `n` is zero.
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(Error::NoSubintervals);
    }

    let step = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        sum += 2.0 * f(a + i as f64 * step);
    }

    Ok(step * sum / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_for_linear_functions() {
        let f = |x: f64| 3.0 * x + 1.0;

        // ∫_0^2 (3x + 1) dx = 6 + 2 = 8
        for n in [1, 2, 7] {
            assert_relative_eq!(trapezoid(f, 0.0, 2.0, n).unwrap(), 8.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn single_and_double_subintervals() {
        let f = |x: f64| x * x;

        // One subinterval: (1/2)(0 + 1) = 0.5
        assert_relative_eq!(trapezoid(f, 0.0, 1.0, 1).unwrap(), 0.5);

        // Two subintervals: (0.5/2)(0 + 1 + 2·0.25) = 0.375
        assert_relative_eq!(trapezoid(f, 0.0, 1.0, 2).unwrap(), 0.375);
    }

    #[test]
    fn converges_with_more_subintervals() {
        let exact = 2.0;
        let coarse = trapezoid(f64::sin, 0.0, std::f64::consts::PI, 8).unwrap();
        let fine = trapezoid(f64::sin, 0.0, std::f64::consts::PI, 64).unwrap();

        assert!((fine - exact).abs() < (coarse - exact).abs());
        assert_relative_eq!(fine, exact, epsilon = 1e-3);
    }

    #[test]
    fn zero_subintervals_is_an_error() {
        assert_eq!(trapezoid(f64::cos, 0.0, 1.0, 0), Err(Error::NoSubintervals));
    }
}
