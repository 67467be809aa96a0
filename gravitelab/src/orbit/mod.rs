mod state;

pub use state::{OrbitSample, OrbitState};

use crate::gravity::circular_velocity;

/// Eccentricity of the drawn ellipse.
pub const ECCENTRICITY: f64 = 0.5;

/// Factor applied to the angular speed so that the orbit visibly moves.
pub const VISUAL_SPEED_BOOST: f64 = 1e4;

/// Divisor applied to the angular speed before the boost.
pub const ANGULAR_SPEED_DIVISOR: f64 = 1e3;

/// Distances below `.0` meters are drawn with a semi-major axis of `.1`.
pub const NEAR_BAND: (f64, f64) = (1e6, 5.0);

/// Distances below `.0` meters, and outside [`NEAR_BAND`], are drawn with a semi-major axis of `.1`.
pub const MID_BAND: (f64, f64) = (1e8, 20.0);

/// Semi-major axis used for every distance beyond [`MID_BAND`].
pub const FAR_SEMI_MAJOR_AXIS: f64 = 40.0;

/// Number of positions kept in the trail of the orbiting body.
pub const TRAIL_LIMIT: usize = 200;

/// Visual-scale choices used to turn a physical distance into a drawable orbit.
///
/// These values are illustrative and do not follow from physical law. The default values are the
/// constants of this module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitTuning {
    /// Eccentricity of the ellipse, in `[0, 1)`.
    pub eccentricity: f64,
    /// Factor applied to the angular speed.
    pub speed_boost: f64,
    /// Divisor applied to the angular speed before the boost.
    pub speed_divisor: f64,
    /// Upper distance bound and semi-major axis of the nearest band.
    pub near_band: (f64, f64),
    /// Upper distance bound and semi-major axis of the middle band.
    pub mid_band: (f64, f64),
    /// Semi-major axis beyond the middle band.
    pub far_semi_major_axis: f64,
    /// Number of positions kept in the trail.
    pub trail_limit: usize,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            eccentricity: ECCENTRICITY,
            speed_boost: VISUAL_SPEED_BOOST,
            speed_divisor: ANGULAR_SPEED_DIVISOR,
            near_band: NEAR_BAND,
            mid_band: MID_BAND,
            far_semi_major_axis: FAR_SEMI_MAJOR_AXIS,
            trail_limit: TRAIL_LIMIT,
        }
    }
}

impl OrbitTuning {
    /// Returns the drawn semi-major axis for a physical distance, a step function of the distance.
    ///
    /// ```
    /// use gravitelab::orbit::OrbitTuning;
    ///
    /// let tuning = OrbitTuning::default();
    /// assert_eq!(tuning.semi_major_axis(5e5), 5.0);
    /// assert_eq!(tuning.semi_major_axis(5e7), 20.0);
    /// assert_eq!(tuning.semi_major_axis(5e9), 40.0);
    /// ```
    #[inline]
    pub fn semi_major_axis(&self, distance: f64) -> f64 {
        if distance < self.near_band.0 {
            self.near_band.1
        } else if distance < self.mid_band.0 {
            self.mid_band.1
        } else {
            self.far_semi_major_axis
        }
    }

    /// Returns the semi-minor axis of the ellipse with the given semi-major axis.
    ///
    /// `b = a * √(1 - e²)`
    #[inline]
    pub fn semi_minor_axis(&self, semi_major_axis: f64) -> f64 {
        semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Returns the angular speed of the drawn orbit, in radians per second of real time.
    ///
    /// This is the circular velocity at `distance` divided by the distance, scaled by the divisor
    /// and the boost. A non-positive (or NaN) distance gives an angular speed of zero.
    #[inline]
    pub fn angular_speed(&self, central_mass: f64, distance: f64) -> f64 {
        if distance > 0.0 {
            circular_velocity(&central_mass, distance) / distance / self.speed_divisor
                * self.speed_boost
        } else {
            0.0
        }
    }
}

/// Constants of a drawn orbit, derived once per change of central mass or distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitConstants {
    /// Semi-major axis of the ellipse, along x, in scene units.
    pub semi_major_axis: f64,
    /// Semi-minor axis of the ellipse, along y, in scene units.
    pub semi_minor_axis: f64,
    /// Angular speed of the orbiting body, in radians per second.
    pub angular_speed: f64,
    /// Mass of the central body, in kilograms.
    pub central_mass: f64,
}

impl OrbitConstants {
    /// Derives the orbit constants for a central body of mass `central_mass` at `distance`.
    ///
    /// This is a pure function: equal inputs always give equal constants.
    ///
    /// ```
    /// use gravitelab::orbit::{OrbitConstants, OrbitTuning};
    ///
    /// let constants = OrbitConstants::derive(5.972e24, 3.844e8, &OrbitTuning::default());
    /// assert_eq!(constants.semi_major_axis, 40.0);
    /// assert_eq!(constants.semi_minor_axis, 40.0 * 0.75_f64.sqrt());
    /// ```
    pub fn derive(central_mass: f64, distance: f64, tuning: &OrbitTuning) -> Self {
        let semi_major_axis = tuning.semi_major_axis(distance);

        Self {
            semi_major_axis,
            semi_minor_axis: tuning.semi_minor_axis(semi_major_axis),
            angular_speed: tuning.angular_speed(central_mass, distance),
            central_mass,
        }
    }

    /// Returns `true` if `(x, y)` lies on the ellipse, up to a relative `epsilon`.
    pub fn contains(&self, x: f64, y: f64, epsilon: f64) -> bool {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        ((x * x) / (a * a) + (y * y) / (b * b) - 1.0).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gravity::G;
    use rand::prelude::*;

    #[test]
    fn bands_match_literals() {
        let tuning = OrbitTuning::default();

        assert_eq!(tuning.semi_major_axis(5e5), 5.0);
        assert_eq!(tuning.semi_major_axis(5e7), 20.0);
        assert_eq!(tuning.semi_major_axis(5e9), 40.0);
        assert_eq!(tuning.semi_major_axis(1e6), 20.0);
        assert_eq!(tuning.semi_major_axis(1e8), 40.0);
        assert_eq!(tuning.semi_major_axis(0.0), 5.0);
    }

    #[test]
    fn bands_are_monotonic() {
        let tuning = OrbitTuning::default();
        let mut rng = StdRng::seed_from_u64(0x6772_6176);

        let mut distances = (0..1_000)
            .map(|_| 10f64.powf(rng.gen_range(-3.0..12.0)))
            .chain([1e6, 1e8, 1e6 - 1.0, 1e8 - 1.0])
            .collect::<Vec<_>>();
        distances.sort_by(f64::total_cmp);

        distances.windows(2).for_each(|pair| {
            assert!(tuning.semi_major_axis(pair[0]) <= tuning.semi_major_axis(pair[1]));
        });
    }

    #[test]
    fn minor_axis_uses_eccentricity() {
        let tuning = OrbitTuning::default();
        assert_eq!(tuning.semi_minor_axis(20.0), 20.0 * 0.75_f64.sqrt());

        let circle = OrbitTuning {
            eccentricity: 0.0,
            ..tuning
        };
        assert_eq!(circle.semi_minor_axis(20.0), 20.0);
    }

    #[test]
    fn angular_speed_formula() {
        let tuning = OrbitTuning::default();
        let (mass, distance) = (5.972e24, 3.844e8);
        let expected = (G * mass / distance).sqrt() / distance / 1000.0 * 1e4;

        assert!((tuning.angular_speed(mass, distance) - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn non_positive_distance_stops_the_orbit() {
        let tuning = OrbitTuning::default();

        assert_eq!(tuning.angular_speed(5.972e24, 0.0), 0.0);
        assert_eq!(tuning.angular_speed(5.972e24, -1.0), 0.0);
        assert_eq!(tuning.angular_speed(5.972e24, f64::NAN), 0.0);
    }

    #[test]
    fn derive_is_pure() {
        let tuning = OrbitTuning::default();
        assert_eq!(
            OrbitConstants::derive(1e24, 5e7, &tuning),
            OrbitConstants::derive(1e24, 5e7, &tuning)
        );
    }
}
