use crate::{
    gravity::DerivedQuantities,
    parameters::{BodyKind, SimulationParameters},
};

/// Color in the sRGB color space, each channel in `[0, 1]`.
pub type Srgb = [f32; 3];

const BLUE: Srgb = [0.0, 0.0, 1.0];
const WHITE: Srgb = [1.0, 1.0, 1.0];
const ORANGE: Srgb = [243.0 / 255.0, 156.0 / 255.0, 18.0 / 255.0];
const CYAN: Srgb = [0.0, 204.0 / 255.0, 1.0];

/// Radius of the sphere drawn for the central body, in scene units.
pub const CENTRAL_RADIUS: f32 = 2.2;

/// Radius of the sphere drawn for the orbiting body, in scene units.
pub const ORBITING_RADIUS: f32 = 1.6;

/// Point light emitted by gaseous bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSpec {
    /// Color of the light.
    pub color: Srgb,
    /// Relative intensity of the light; renderers scale it to their own units.
    pub intensity: f32,
    /// Range of the light, in scene units.
    pub range: f32,
}

/// How a body is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyAppearance {
    /// Radius of the sphere, in scene units.
    pub radius: f32,
    /// Base and emissive color.
    pub color: Srgb,
    /// Surface roughness, in `[0, 1]`.
    pub roughness: f32,
    /// How metallic the surface looks, in `[0, 1]`.
    pub metalness: f32,
    /// Factor applied to the color to obtain the emitted color.
    pub emissive_intensity: f32,
    /// Light emitted by the body, if any.
    pub light: Option<LightSpec>,
}

impl BodyAppearance {
    fn solid(radius: f32, color: Srgb) -> Self {
        Self {
            radius,
            color,
            roughness: 0.3,
            metalness: 0.8,
            emissive_intensity: 0.5,
            light: None,
        }
    }

    /// Appearance of the central body of the given kind.
    pub fn central(kind: BodyKind) -> Self {
        if !kind.is_gas() {
            return Self::solid(CENTRAL_RADIUS, BLUE);
        }

        Self {
            radius: CENTRAL_RADIUS,
            color: BLUE,
            roughness: 0.95,
            metalness: 0.1,
            emissive_intensity: 0.8,
            light: Some(LightSpec {
                color: CYAN,
                intensity: 1.2,
                range: 20.0,
            }),
        }
    }

    /// Appearance of the orbiting body of the given kind.
    pub fn orbiting(kind: BodyKind) -> Self {
        if !kind.is_gas() {
            return Self::solid(ORBITING_RADIUS, ORANGE);
        }

        Self {
            radius: ORBITING_RADIUS,
            color: WHITE,
            roughness: 1.0,
            metalness: 0.05,
            emissive_intensity: 1.1,
            light: Some(LightSpec {
                color: WHITE,
                intensity: 1.5,
                range: 15.0,
            }),
        }
    }

    /// Emitted color, the base color scaled by the emissive intensity.
    pub fn emissive(&self) -> Srgb {
        self.color.map(|channel| channel * self.emissive_intensity)
    }
}

/// Everything that is drawn for a set of [`SimulationParameters`], apart from the moving parts of
/// the orbit.
///
/// Which of the two bodies is first or second does not matter: exchanging them gives the same
/// scene, unless both masses are equal, in which case the first body stays central.
///
/// ```
/// use gravitelab::prelude::*;
///
/// let parameters = SimulationParameters {
///     kind2: BodyKind::Gas,
///     ..Default::default()
/// };
///
/// assert_eq!(Scene::from(&parameters), Scene::from(&parameters.swapped()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    /// Drawing of the heavier body, at the origin.
    pub central: BodyAppearance,
    /// Drawing of the lighter body.
    pub orbiting: BodyAppearance,
    /// Mass of the central body, in kilograms.
    pub central_mass: f64,
    /// Mass of the orbiting body, in kilograms.
    pub orbiting_mass: f64,
    /// Distance between the bodies, in meters.
    pub distance: f64,
    /// Quantities displayed next to the central body.
    pub quantities: DerivedQuantities,
}

impl From<&SimulationParameters> for Scene {
    fn from(parameters: &SimulationParameters) -> Self {
        let roles = parameters.roles();

        Self {
            central: BodyAppearance::central(roles.central.kind),
            orbiting: BodyAppearance::orbiting(roles.orbiting.kind),
            central_mass: roles.central.mass,
            orbiting_mass: roles.orbiting.mass,
            distance: parameters.distance,
            quantities: DerivedQuantities::from(parameters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH: f64 = 5.972e24;
    const MOON: f64 = 7.348e22;

    #[test]
    fn swapping_masses_gives_the_same_scene() {
        let earth_first = SimulationParameters {
            mass1: EARTH,
            mass2: MOON,
            ..Default::default()
        };
        let moon_first = SimulationParameters {
            mass1: MOON,
            mass2: EARTH,
            ..Default::default()
        };

        assert_eq!(Scene::from(&earth_first), Scene::from(&moon_first));
    }

    #[test]
    fn swapping_bodies_gives_the_same_scene() {
        for kind1 in BodyKind::ALL {
            for kind2 in BodyKind::ALL {
                let parameters = SimulationParameters {
                    kind1,
                    kind2,
                    ..Default::default()
                };
                assert_eq!(Scene::from(&parameters), Scene::from(&parameters.swapped()));
            }
        }
    }

    #[test]
    fn only_gas_bodies_emit_light() {
        assert!(BodyAppearance::central(BodyKind::Solid).light.is_none());
        assert!(BodyAppearance::orbiting(BodyKind::Solid).light.is_none());

        let central = BodyAppearance::central(BodyKind::Gas).light;
        let orbiting = BodyAppearance::orbiting(BodyKind::Gas).light;
        assert_eq!(central.map(|light| light.range), Some(20.0));
        assert_eq!(orbiting.map(|light| light.range), Some(15.0));
    }

    #[test]
    fn roles_pick_the_appearance() {
        let scene = Scene::from(&SimulationParameters {
            mass1: MOON,
            mass2: EARTH,
            kind1: BodyKind::Gas,
            kind2: BodyKind::Solid,
            ..Default::default()
        });

        assert_eq!(scene.central, BodyAppearance::central(BodyKind::Solid));
        assert_eq!(scene.orbiting, BodyAppearance::orbiting(BodyKind::Gas));
        assert_eq!(scene.central_mass, EARTH);
        assert_eq!(scene.orbiting_mass, MOON);
    }

    #[test]
    fn emissive_scales_color() {
        let solid = BodyAppearance::orbiting(BodyKind::Solid);
        assert_eq!(solid.emissive(), ORANGE.map(|c| c * 0.5));
    }
}
