use crate::parameters::SimulationParameters;

/// Newtonian constant of gravitation, in m³⋅kg⁻¹⋅s⁻².
pub const G: f64 = 6.67430e-11;

/// Trait for an object that defines a mass. Because the standard gravitational parameter is defined
/// as `µ = gravitational constant * mass`, this trait also provides a method to retrieve it.
///
/// # Example
///
/// ```
/// use gravitelab::prelude::*;
///
/// let earth = Body::solid(5.972e24);
///
/// assert_eq!(earth.mass(), 5.972e24);
/// assert_eq!(earth.mu(), G * 5.972e24);
/// ```
pub trait Mass {
    /// Returns the mass of the body, in kilograms.
    fn mass(&self) -> f64;

    /// Returns the [standard gravitational parameter] of the body, annotated `µ` (mu).
    ///
    /// `µ = gravitational constant * mass`.
    ///
    /// [standard gravitational parameter]: https://en.wikipedia.org/wiki/Standard_gravitational_parameter
    #[inline]
    fn mu(&self) -> f64 {
        G * self.mass()
    }
}

impl Mass for f64 {
    #[inline]
    fn mass(&self) -> f64 {
        *self
    }
}

/// Returns the magnitude of the gravitational force between two masses separated by `distance`,
/// in newtons.
///
/// `F = G * m1 * m2 / r²`
#[inline]
pub fn gravitational_force(m1: f64, m2: f64, distance: f64) -> f64 {
    (G * m1 * m2) / (distance * distance)
}

/// Returns the speed of a circular orbit of radius `distance` around `central`, in m/s.
///
/// `v = √(µ / r)`
#[inline]
pub fn circular_velocity(central: &impl Mass, distance: f64) -> f64 {
    (central.mu() / distance).sqrt()
}

/// Returns the orbital speed given by the [vis-viva equation] at `radius` on an orbit of semi-major
/// axis `semi_major_axis` around `central`.
///
/// `v = √(µ * (2 / r - 1 / a))`
///
/// [vis-viva equation]: https://en.wikipedia.org/wiki/Vis-viva_equation
#[inline]
pub fn vis_viva_speed(central: &impl Mass, radius: f64, semi_major_axis: f64) -> f64 {
    (central.mu() * ((2.0 / radius) - (1.0 / semi_major_axis))).sqrt()
}

/// Quantities displayed alongside the scene, derived from a set of [`SimulationParameters`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedQuantities {
    /// Gravitational force between the two bodies, in newtons.
    pub force: f64,
    /// Speed of a circular orbit at the given distance around the central body, in m/s.
    pub average_velocity: f64,
}

impl From<&SimulationParameters> for DerivedQuantities {
    fn from(parameters: &SimulationParameters) -> Self {
        let roles = parameters.roles();

        Self {
            force: gravitational_force(roles.central.mass, roles.orbiting.mass, parameters.distance),
            average_velocity: circular_velocity(&roles.central, parameters.distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::BodyKind;

    const EARTH: f64 = 5.972e24;
    const MOON: f64 = 7.348e22;
    const EARTH_MOON: f64 = 3.844e8;

    #[test]
    fn force_is_closed_form() {
        let expected = G * EARTH * MOON / (EARTH_MOON * EARTH_MOON);
        assert_eq!(gravitational_force(EARTH, MOON, EARTH_MOON), expected);
    }

    #[test]
    fn quantities_ignore_body_order() {
        let parameters = SimulationParameters {
            mass1: EARTH,
            mass2: MOON,
            distance: EARTH_MOON,
            ..Default::default()
        };

        assert_eq!(
            DerivedQuantities::from(&parameters),
            DerivedQuantities::from(&parameters.swapped())
        );
    }

    #[test]
    fn quantities_use_the_heavier_body() {
        let parameters = SimulationParameters {
            mass1: MOON,
            mass2: EARTH,
            kind1: BodyKind::Gas,
            ..Default::default()
        };
        let quantities = DerivedQuantities::from(&parameters);

        assert_eq!(quantities.force, gravitational_force(EARTH, MOON, EARTH_MOON));
        assert_eq!(quantities.average_velocity, (G * EARTH / EARTH_MOON).sqrt());
        assert!((quantities.force - 1.982e20).abs() / 1.982e20 < 1e-3);
    }

    #[test]
    fn vis_viva_matches_circular_velocity_on_a_circle() {
        let radius = 20.0;
        let circular = circular_velocity(&EARTH, radius);
        let vis_viva = vis_viva_speed(&EARTH, radius, radius);

        assert!((circular - vis_viva).abs() <= circular * 1e-12);
    }

    #[test]
    fn zero_distance_is_not_finite() {
        let quantities = DerivedQuantities::from(&SimulationParameters {
            distance: 0.0,
            ..Default::default()
        });

        assert!(quantities.force.is_infinite());
        assert!(quantities.average_velocity.is_infinite());
    }
}
