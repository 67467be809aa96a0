#![warn(missing_docs)]
//! # GravitéLab
//!
//! GravitéLab is a small crate describing the gravitational interaction of two bodies in a way
//! that can be driven from any rendering loop.
//!
//! ## Goals
//!
//! The crate does not integrate orbits numerically. It provides the closed-form quantities of
//! Newtonian gravitation between two bodies and an illustrative, fixed-shape elliptical orbit that
//! is cheap to evaluate every frame. Distances and sizes of the orbit are rescaled for visibility
//! and are not physically meaningful.
//!
//! Nothing in here depends on a rendering framework: a frame is advanced by handing a time delta to
//! an [`OrbitState`], and what should be drawn is described by a [`Scene`].
//!
//! ## Using GravitéLab
//!
//! ### Parameters and roles
//!
//! A [`SimulationParameters`] value holds the two masses, their [`BodyKind`]s and the distance
//! between them. The heavier body is the central one, the other one orbits it.
//!
//! ```
//! use gravitelab::prelude::*;
//!
//! let parameters = SimulationParameters {
//!     mass1: 7.348e22,
//!     mass2: 5.972e24,
//!     ..Default::default()
//! };
//!
//! let roles = parameters.roles();
//! assert!(roles.reversed);
//! assert_eq!(roles.central.mass, 5.972e24);
//! assert_eq!(roles.orbiting.mass, 7.348e22);
//! ```
//!
//! ### Derived quantities
//!
//! ```
//! use gravitelab::prelude::*;
//!
//! let parameters = SimulationParameters::default();
//! let quantities = DerivedQuantities::from(&parameters);
//!
//! assert_eq!(quantities.force, gravitational_force(5.972e24, 7.348e22, 3.844e8));
//! assert!((quantities.average_velocity - 1018.29).abs() < 1e-2);
//! ```
//!
//! ### Advancing the orbit
//!
//! [`OrbitState::sync`] resets the orbit whenever the central mass or the distance change, and
//! [`OrbitState::advance`] moves it forward by the elapsed real time of a frame.
//!
//! ```
//! use gravitelab::prelude::*;
//!
//! # const DT: f64 = 1.0 / 60.0;
//! let parameters = SimulationParameters::default();
//! let central = parameters.roles().central;
//!
//! let mut orbit = OrbitState::default();
//! for _ in 0..250 {
//!     orbit.sync(central.mass, parameters.distance);
//!     let sample = orbit.advance(DT);
//!     assert!(sample.speed.is_finite());
//! }
//!
//! assert_eq!(orbit.trail().len(), 200);
//! ```
//!
//! ### Invalid input
//!
//! Non-positive or non-finite values are reported by [`SimulationParameters::validate`] and can be
//! replaced by the smallest accepted values with [`SimulationParameters::clamped`].
//!
//! ```
//! use gravitelab::prelude::*;
//!
//! let parameters = SimulationParameters {
//!     distance: 0.0,
//!     ..Default::default()
//! };
//!
//! assert_eq!(parameters.validate(), Err(ParameterError::NonPositiveDistance(0.0)));
//! assert_eq!(parameters.clamped().distance, MIN_DISTANCE);
//! ```
//!
//! [`OrbitState`]: orbit::OrbitState
//! [`OrbitState::sync`]: orbit::OrbitState::sync
//! [`OrbitState::advance`]: orbit::OrbitState::advance
//! [`Scene`]: scene::Scene

/// Newtonian gravity between two bodies.
pub mod gravity;
/// Illustrative elliptical orbit of the lighter body.
pub mod orbit;
/// Parameters chosen by the user and their validation.
pub mod parameters;
/// Text rendering of the derived quantities.
pub mod readout;
/// Render-agnostic description of what is drawn.
pub mod scene;
/// Bounded history of positions.
pub mod trail;

pub use gravity::*;
pub use parameters::*;
pub use trail::Trail;

/// Commonly used types, re-exported.
pub mod prelude {
    pub use crate::{
        gravity::{gravitational_force, vis_viva_speed, DerivedQuantities, Mass, G},
        orbit::{OrbitConstants, OrbitSample, OrbitState, OrbitTuning},
        parameters::{
            Body, BodyKind, ParameterError, Roles, SimulationParameters, MIN_DISTANCE, MIN_MASS,
        },
        scene::Scene,
        trail::Trail,
    };
}
