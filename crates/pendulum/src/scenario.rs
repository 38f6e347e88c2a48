use std::fmt;

use serde::Deserialize;

use crate::params::ForcingParameters;

/// Whether the harmonic drive is applied during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    WithForce,
    NoForce,
}

impl Scenario {
    /// Every scenario, in run order.
    pub const ALL: [Self; 2] = [Self::WithForce, Self::NoForce];

    /// Returns the label used in file names and config files.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WithForce => "with_force",
            Self::NoForce => "no_force",
        }
    }

    /// Returns the forcing applied in this scenario.
    #[must_use]
    pub fn forcing(self, configured: ForcingParameters) -> ForcingParameters {
        match self {
            Self::WithForce => configured,
            Self::NoForce => configured.unforced(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The step method used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Gauss,
    Romberg,
    Adaptive,
}

impl MethodKind {
    /// Every method, in run order.
    pub const ALL: [Self; 3] = [Self::Gauss, Self::Romberg, Self::Adaptive];

    /// Returns the label used in file names and config files.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gauss => "gauss",
            Self::Romberg => "romberg",
            Self::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the output file name for a run, `pendulum_<method>_<scenario>.csv`.
#[must_use]
pub fn file_name(method: MethodKind, scenario: Scenario) -> String {
    format!("pendulum_{method}_{scenario}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        let names: Vec<String> = Scenario::ALL
            .into_iter()
            .flat_map(|scenario| MethodKind::ALL.map(|method| file_name(method, scenario)))
            .collect();

        assert_eq!(
            names,
            [
                "pendulum_gauss_with_force.csv",
                "pendulum_romberg_with_force.csv",
                "pendulum_adaptive_with_force.csv",
                "pendulum_gauss_no_force.csv",
                "pendulum_romberg_no_force.csv",
                "pendulum_adaptive_no_force.csv",
            ]
        );
    }

    #[test]
    fn no_force_zeroes_amplitude_only() {
        let configured = ForcingParameters {
            amplitude: 1.5,
            frequency: 3.0,
        };

        assert_eq!(Scenario::WithForce.forcing(configured), configured);

        let unforced = Scenario::NoForce.forcing(configured);
        assert_eq!(unforced.amplitude, 0.0);
        assert_eq!(unforced.frequency, 3.0);
    }
}
