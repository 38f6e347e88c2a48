use swing_core::Dynamics;

use crate::params::{ForcingParameters, ParameterError, PhysicalParameters};

/// Angular state of the pendulum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    /// Angle from the downward vertical, in radians.
    pub angle: f64,

    /// Angular velocity in rad/s.
    pub angular_velocity: f64,
}

impl State {
    #[must_use]
    pub fn new(angle: f64, angular_velocity: f64) -> Self {
        Self {
            angle,
            angular_velocity,
        }
    }
}

impl From<State> for [f64; 2] {
    fn from(state: State) -> Self {
        [state.angle, state.angular_velocity]
    }
}

impl From<[f64; 2]> for State {
    fn from([angle, angular_velocity]: [f64; 2]) -> Self {
        Self {
            angle,
            angular_velocity,
        }
    }
}

/// A damped pendulum under harmonic forcing.
///
/// The equations of motion are
///
/// ```text
/// dθ/dt = ω
/// dω/dt = A·cos(ω_d·t) − (c / (m·L))·ω − (g / L)·sin(θ)
/// ```
///
/// The coefficients `c / (m·L)` and `g / L` are computed once at construction.
/// The forcing is fixed for the lifetime of the model, so each run builds its
/// own `Pendulum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    physical: PhysicalParameters,
    forcing: ForcingParameters,
    damping_rate: f64,
    gravity_ratio: f64,
}

impl Pendulum {
    /// Creates a pendulum model.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if either parameter set is invalid.
    pub fn new(
        physical: PhysicalParameters,
        forcing: ForcingParameters,
    ) -> Result<Self, ParameterError> {
        physical.validate()?;
        forcing.validate()?;

        Ok(Self {
            physical,
            forcing,
            damping_rate: physical.damping_rate(),
            gravity_ratio: physical.gravity_ratio(),
        })
    }

    #[must_use]
    pub fn physical(&self) -> &PhysicalParameters {
        &self.physical
    }

    #[must_use]
    pub fn forcing(&self) -> &ForcingParameters {
        &self.forcing
    }

    /// Returns the time derivative of `state` at time `t`.
    #[must_use]
    pub fn rates(&self, t: f64, state: State) -> State {
        let State {
            angle,
            angular_velocity,
        } = state;

        State {
            angle: angular_velocity,
            angular_velocity: self.forcing.acceleration(t)
                - self.damping_rate * angular_velocity
                - self.gravity_ratio * angle.sin(),
        }
    }
}

impl Dynamics<2> for Pendulum {
    fn derivative(&self, t: f64, state: &[f64; 2]) -> [f64; 2] {
        self.rates(t, State::from(*state)).into()
    }
}
