use std::fmt;

use crate::gravity::Mass;

/// Smallest mass accepted by [`SimulationParameters::clamped`], in kilograms.
pub const MIN_MASS: f64 = 1.0;

/// Smallest distance accepted by [`SimulationParameters::clamped`], in meters.
pub const MIN_DISTANCE: f64 = 1.0;

/// Material a body is made of. Only changes how the body looks and whether it emits light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Rocky or metallic body.
    #[default]
    Solid,
    /// Gaseous body, glowing and lighting its surroundings.
    Gas,
}

impl BodyKind {
    /// Every kind, in the order they are offered to the user.
    pub const ALL: [Self; 2] = [Self::Solid, Self::Gas];

    /// Returns `true` for gaseous bodies, which light their surroundings.
    #[inline]
    pub fn is_gas(self) -> bool {
        self == Self::Gas
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => f.write_str("Solid"),
            Self::Gas => f.write_str("Gas"),
        }
    }
}

/// A body of the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    /// Mass of the body, in kilograms.
    pub mass: f64,
    /// Material of the body.
    pub kind: BodyKind,
}

impl Body {
    /// Creates a new [`Body`] with the given mass and kind.
    #[inline]
    pub const fn new(mass: f64, kind: BodyKind) -> Self {
        Self { mass, kind }
    }

    /// Creates a new solid [`Body`] with the given mass.
    #[inline]
    pub const fn solid(mass: f64) -> Self {
        Self::new(mass, BodyKind::Solid)
    }
}

impl Mass for Body {
    #[inline]
    fn mass(&self) -> f64 {
        self.mass
    }
}

/// Assignment of the two bodies to the central and orbiting roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Roles {
    /// The heavier body, at rest at the origin.
    pub central: Body,
    /// The lighter body, following the orbit.
    pub orbiting: Body,
    /// `true` when the second body is the central one.
    pub reversed: bool,
}

/// Problems found in user provided [`SimulationParameters`].
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum ParameterError {
    /// A value is NaN or infinite.
    #[error("{field} is not a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A mass is zero or negative.
    #[error("mass {body} must be positive, got {value} kg")]
    NonPositiveMass {
        /// Index of the body, starting at 1.
        body: u8,
        /// The rejected mass.
        value: f64,
    },
    /// The distance is zero or negative.
    #[error("distance must be positive, got {0} m")]
    NonPositiveDistance(f64),
}

/// Values chosen by the user: the two masses, their kinds and the distance separating them.
///
/// Defaults to the Earth and the Moon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Mass of the first body, in kilograms.
    pub mass1: f64,
    /// Mass of the second body, in kilograms.
    pub mass2: f64,
    /// Material of the first body.
    pub kind1: BodyKind,
    /// Material of the second body.
    pub kind2: BodyKind,
    /// Distance between the two bodies, in meters.
    pub distance: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            mass1: 5.972e24,
            mass2: 7.348e22,
            kind1: BodyKind::Solid,
            kind2: BodyKind::Solid,
            distance: 384_400_000.0,
        }
    }
}

impl SimulationParameters {
    /// Returns the first body.
    #[inline]
    pub fn body1(&self) -> Body {
        Body::new(self.mass1, self.kind1)
    }

    /// Returns the second body.
    #[inline]
    pub fn body2(&self) -> Body {
        Body::new(self.mass2, self.kind2)
    }

    /// Returns which body is central and which one orbits.
    ///
    /// The heavier body is central. When both masses are equal the first body is central.
    #[inline]
    pub fn roles(&self) -> Roles {
        let (body1, body2) = (self.body1(), self.body2());

        if self.mass2 > self.mass1 {
            Roles {
                central: body2,
                orbiting: body1,
                reversed: true,
            }
        } else {
            Roles {
                central: body1,
                orbiting: body2,
                reversed: false,
            }
        }
    }

    /// Returns the same parameters with the first and second bodies exchanged.
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            mass1: self.mass2,
            mass2: self.mass1,
            kind1: self.kind2,
            kind2: self.kind1,
            distance: self.distance,
        }
    }

    /// Checks that every value is finite and positive, returning the first problem found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (field, value) in [
            ("mass 1", self.mass1),
            ("mass 2", self.mass2),
            ("distance", self.distance),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { field });
            }
        }

        for (body, value) in [(1, self.mass1), (2, self.mass2)] {
            if value <= 0.0 {
                return Err(ParameterError::NonPositiveMass { body, value });
            }
        }

        if self.distance <= 0.0 {
            return Err(ParameterError::NonPositiveDistance(self.distance));
        }

        Ok(())
    }

    /// Returns the parameters with masses raised to [`MIN_MASS`] and the distance raised to
    /// [`MIN_DISTANCE`] when they are below, NaN or infinite.
    pub fn clamped(self) -> Self {
        Self {
            mass1: clamp_positive(self.mass1, MIN_MASS),
            mass2: clamp_positive(self.mass2, MIN_MASS),
            distance: clamp_positive(self.distance, MIN_DISTANCE),
            ..self
        }
    }
}

#[inline]
fn clamp_positive(value: f64, min: f64) -> f64 {
    if value.is_finite() {
        value.max(min)
    } else {
        min
    }
}
