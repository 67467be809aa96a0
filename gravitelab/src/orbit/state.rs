use glam::DVec3;

use super::{OrbitConstants, OrbitTuning};
use crate::{gravity::vis_viva_speed, trail::Trail};

/// Position and speed of the orbiting body after a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitSample {
    /// Angle along the ellipse, in radians. Grows without bound.
    pub angle: f64,
    /// Position relative to the central body, in scene units.
    pub position: DVec3,
    /// Distance to the central body, in scene units.
    pub radius: f64,
    /// Instantaneous speed given by the vis-viva equation on the drawn radius, in m/s.
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct OrbitKey {
    central_mass: f64,
    distance: f64,
}

/// Running state of the drawn orbit: elapsed time, cached [`OrbitConstants`] and the trail.
///
/// The constants are derived from the central mass and the distance. [`OrbitState::sync`] compares
/// them with the values the constants were derived from and calls [`OrbitState::reset`] when they
/// differ, which restarts the orbit and clears the trail.
///
/// # Example
///
/// ```
/// use gravitelab::orbit::OrbitState;
///
/// let mut orbit = OrbitState::default();
///
/// assert!(orbit.sync(5.972e24, 3.844e8));
/// orbit.advance(0.5);
/// assert!(!orbit.sync(5.972e24, 3.844e8));
/// assert_eq!(orbit.elapsed(), 0.5);
///
/// assert!(orbit.sync(5.972e24, 1e5));
/// assert_eq!(orbit.elapsed(), 0.0);
/// assert!(orbit.trail().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct OrbitState {
    tuning: OrbitTuning,
    key: Option<OrbitKey>,
    constants: OrbitConstants,
    elapsed: f64,
    trail: Trail,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(OrbitTuning::default())
    }
}

impl OrbitState {
    /// Creates a new [`OrbitState`] with the given tuning. Nothing is derived until the first call
    /// to [`OrbitState::sync`] or [`OrbitState::reset`].
    pub fn new(tuning: OrbitTuning) -> Self {
        Self {
            tuning,
            key: None,
            constants: OrbitConstants::default(),
            elapsed: 0.0,
            trail: Trail::new(tuning.trail_limit),
        }
    }

    /// Resets the orbit if `central_mass` or `distance` changed since the constants were last
    /// derived. Returns `true` if a reset happened.
    pub fn sync(&mut self, central_mass: f64, distance: f64) -> bool {
        let key = OrbitKey {
            central_mass,
            distance,
        };

        // NaN inputs compare unequal to themselves and reset every frame, like any other change.
        if self.key == Some(key) {
            return false;
        }

        self.reset(central_mass, distance);
        true
    }

    /// Derives new constants, restarts the clock and clears the trail.
    pub fn reset(&mut self, central_mass: f64, distance: f64) {
        self.key = Some(OrbitKey {
            central_mass,
            distance,
        });
        self.constants = OrbitConstants::derive(central_mass, distance, &self.tuning);
        self.elapsed = 0.0;
        self.trail.clear();
    }

    /// Advances the orbit by `delta` seconds of real time and records the new position in the
    /// trail.
    pub fn advance(&mut self, delta: f64) -> OrbitSample {
        self.elapsed += delta;
        let sample = self.sample();
        self.trail.push(sample.position);

        sample
    }

    /// Evaluates the orbit at the current elapsed time without advancing it.
    pub fn sample(&self) -> OrbitSample {
        let OrbitConstants {
            semi_major_axis: a,
            semi_minor_axis: b,
            angular_speed,
            central_mass,
        } = self.constants;

        let angle = angular_speed * self.elapsed;
        let position = DVec3::new(a * angle.cos(), b * angle.sin(), 0.0);
        let radius = position.length();
        let speed = vis_viva_speed(&central_mass, radius, a);

        OrbitSample {
            angle,
            position,
            radius,
            speed,
        }
    }

    /// Elapsed real time since the last reset, in seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Constants of the current orbit.
    #[inline]
    pub fn constants(&self) -> &OrbitConstants {
        &self.constants
    }

    /// Recent positions of the orbiting body.
    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gravity::G;
    use rand::prelude::*;

    const EARTH: f64 = 5.972e24;
    const EARTH_MOON: f64 = 3.844e8;
    const DT: f64 = 1.0 / 60.0;

    fn running(central_mass: f64, distance: f64) -> OrbitState {
        let mut orbit = OrbitState::default();
        orbit.sync(central_mass, distance);
        orbit
    }

    #[test]
    fn positions_lie_on_the_ellipse() {
        let mut rng = StdRng::seed_from_u64(7);

        for distance in [5e5, 5e7, 5e9] {
            let mut orbit = running(EARTH, distance);
            let constants = *orbit.constants();
            assert_eq!(
                constants.semi_minor_axis,
                constants.semi_major_axis * 0.75_f64.sqrt()
            );

            for _ in 0..200 {
                let sample = orbit.advance(rng.gen_range(0.0..1e4));
                assert!(constants.contains(sample.position.x, sample.position.y, 1e-9));
                assert_eq!(sample.position.z, 0.0);
            }
        }
    }

    #[test]
    fn starts_on_the_major_axis() {
        let orbit = running(EARTH, EARTH_MOON);
        let sample = orbit.sample();

        assert_eq!(sample.angle, 0.0);
        assert_eq!(sample.position, DVec3::new(40.0, 0.0, 0.0));
        assert_eq!(sample.radius, 40.0);
    }

    #[test]
    fn speed_follows_vis_viva() {
        let mut orbit = running(EARTH, EARTH_MOON);

        for _ in 0..10 {
            let sample = orbit.advance(3600.0);
            let a = orbit.constants().semi_major_axis;
            let expected = (G * EARTH * (2.0 / sample.radius - 1.0 / a)).sqrt();

            assert!(sample.speed.is_finite());
            assert!((sample.speed - expected).abs() <= expected * 1e-12);
        }
    }

    #[test]
    fn angle_grows_with_elapsed_time() {
        let mut orbit = running(EARTH, 5e5);
        let angular_speed = orbit.constants().angular_speed;

        orbit.advance(2.0);
        let sample = orbit.advance(3.0);

        assert_eq!(orbit.elapsed(), 5.0);
        assert_eq!(sample.angle, angular_speed * 5.0);
    }

    #[test]
    fn trail_keeps_the_200_most_recent_positions() {
        let mut orbit = running(EARTH, 5e5);

        let samples = (0..250)
            .map(|_| orbit.advance(DT).position)
            .collect::<Vec<_>>();

        assert_eq!(orbit.trail().len(), 200);
        assert!(orbit.trail().iter().eq(samples[50..].iter().copied()));
    }

    #[test]
    fn changing_inputs_resets() {
        let mut orbit = running(EARTH, EARTH_MOON);
        (0..10).for_each(|_| {
            orbit.advance(DT);
        });

        assert!(!orbit.sync(EARTH, EARTH_MOON));
        assert_eq!(orbit.trail().len(), 10);

        assert!(orbit.sync(EARTH * 2.0, EARTH_MOON));
        assert_eq!(orbit.elapsed(), 0.0);
        assert!(orbit.trail().is_empty());

        orbit.advance(DT);
        assert!(orbit.sync(EARTH * 2.0, 5e5));
        assert!(orbit.trail().is_empty());
        assert_eq!(orbit.constants().semi_major_axis, 5.0);
    }

    #[test]
    fn zero_distance_keeps_running() {
        let mut orbit = running(EARTH, 0.0);

        for _ in 0..250 {
            let sample = orbit.advance(DT);
            assert!(sample.position.is_finite());
            assert_eq!(sample.position, DVec3::new(5.0, 0.0, 0.0));
        }
        assert_eq!(orbit.trail().len(), 200);
    }

    #[test]
    fn custom_trail_limit() {
        let mut orbit = OrbitState::new(OrbitTuning {
            trail_limit: 3,
            ..Default::default()
        });
        orbit.sync(EARTH, EARTH_MOON);
        (0..5).for_each(|_| {
            orbit.advance(DT);
        });

        assert_eq!(orbit.trail().len(), 3);
        assert_eq!(orbit.trail().capacity(), 3);
    }
}
