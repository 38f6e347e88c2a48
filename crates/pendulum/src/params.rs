use serde::Deserialize;
use thiserror::Error;
use uom::{
    si::{
        Quantity, ISQ, SI,
        acceleration::meter_per_second_squared,
        f64::{Acceleration, Force, Length, Mass, Time},
        force::newton,
        length::meter,
        mass::kilogram,
        time::second,
    },
    typenum::{N1, P1, Z0},
};

/// Damping coefficient: force per unit velocity (N·s/m or kg/s).
pub type Damping = Quantity<ISQ<Z0, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Errors from validating pendulum parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter `{0}` must be finite")]
    NonFinite(&'static str),

    #[error("pendulum length must be positive")]
    NonPositiveLength,

    #[error("bob mass must be positive")]
    NonPositiveMass,
}

/// Physical constants of the pendulum.
///
/// Deserialized values are SI base units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicalParameters {
    pub length: Length,
    pub mass: Mass,
    pub damping: Damping,
    pub gravity: Acceleration,
}

impl PhysicalParameters {
    /// Creates parameters from SI values (m, kg, N·s/m, m/s²).
    #[must_use]
    pub fn new_si(length: f64, mass: f64, damping: f64, gravity: f64) -> Self {
        Self {
            length: Length::new::<meter>(length),
            mass: Mass::new::<kilogram>(mass),
            damping: Force::new::<newton>(damping) * Time::new::<second>(1.0)
                / Length::new::<meter>(1.0),
            gravity: Acceleration::new::<meter_per_second_squared>(gravity),
        }
    }

    /// Checks that every value is finite and that length and mass are positive.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let values = [
            ("length", self.length.get::<meter>()),
            ("mass", self.mass.get::<kilogram>()),
            ("damping", self.damping.value),
            ("gravity", self.gravity.get::<meter_per_second_squared>()),
        ];
        if let Some(&(name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParameterError::NonFinite(name));
        }
        if self.length.get::<meter>() <= 0.0 {
            return Err(ParameterError::NonPositiveLength);
        }
        if self.mass.get::<kilogram>() <= 0.0 {
            return Err(ParameterError::NonPositiveMass);
        }
        Ok(())
    }

    /// Returns `c / (m·L)` in 1/s.
    #[must_use]
    pub fn damping_rate(&self) -> f64 {
        (self.damping / (self.mass * self.length)).value
    }

    /// Returns `g / L` in 1/s².
    #[must_use]
    pub fn gravity_ratio(&self) -> f64 {
        (self.gravity / self.length).value
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self::new_si(1.0, 0.2, 0.1, 9.81)
    }
}

/// Harmonic drive applied to the angular acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForcingParameters {
    /// Amplitude in rad/s².
    pub amplitude: f64,

    /// Angular frequency in rad/s.
    pub frequency: f64,
}

impl ForcingParameters {
    /// Returns the same drive with zero amplitude.
    #[must_use]
    pub fn unforced(self) -> Self {
        Self {
            amplitude: 0.0,
            ..self
        }
    }

    /// Returns the drive acceleration `A·cos(ω_d·t)`.
    #[must_use]
    pub fn acceleration(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * t).cos()
    }

    /// Checks that amplitude and frequency are finite.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFinite`] naming the offending value.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.amplitude.is_finite() {
            return Err(ParameterError::NonFinite("amplitude"));
        }
        if !self.frequency.is_finite() {
            return Err(ParameterError::NonFinite("frequency"));
        }
        Ok(())
    }
}

impl Default for ForcingParameters {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            frequency: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_coefficients() {
        let params = PhysicalParameters::default();

        assert_relative_eq!(params.damping_rate(), 0.5);
        assert_relative_eq!(params.gravity_ratio(), 9.81);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn coefficients_scale_with_length() {
        let params = PhysicalParameters::new_si(2.0, 0.5, 0.3, 9.81);

        assert_relative_eq!(params.damping_rate(), 0.3);
        assert_relative_eq!(params.gravity_ratio(), 4.905);
    }

    #[test]
    fn invalid_physical_parameters() {
        assert_eq!(
            PhysicalParameters::new_si(0.0, 0.2, 0.1, 9.81).validate(),
            Err(ParameterError::NonPositiveLength)
        );
        assert_eq!(
            PhysicalParameters::new_si(1.0, -0.2, 0.1, 9.81).validate(),
            Err(ParameterError::NonPositiveMass)
        );
        assert_eq!(
            PhysicalParameters::new_si(1.0, 0.2, f64::NAN, 9.81).validate(),
            Err(ParameterError::NonFinite("damping"))
        );
    }

    #[test]
    fn forcing() {
        let forcing = ForcingParameters::default();

        assert_relative_eq!(forcing.acceleration(0.0), 0.5);
        assert_relative_eq!(
            forcing.acceleration(std::f64::consts::FRAC_PI_2),
            -0.5,
            epsilon = 1e-15
        );
        assert_eq!(forcing.unforced().acceleration(1.3), 0.0);
        assert_eq!(forcing.unforced().frequency, 2.0);

        let bad = ForcingParameters {
            amplitude: f64::INFINITY,
            frequency: 2.0,
        };
        assert_eq!(bad.validate(), Err(ParameterError::NonFinite("amplitude")));
    }
}
