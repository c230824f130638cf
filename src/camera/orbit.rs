//! Spherical-orbit rotation around the world origin.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::camera::core::Camera;
use crate::util::damping::{clamp, DampedScalar};

/// Radians of orbit per pixel of drag delta.
const ANGULAR_SCALE: f32 = 0.005;

/// Polar clamp keeping the orbit strictly off the poles; crossing a
/// pole would flip the look-at basis.
const MIN_PHI: f32 = 0.01;
const MAX_PHI: f32 = FRAC_PI_2 - 0.01;

/// Orbit model: drag intents set angular velocities that swing the
/// camera around the origin on a sphere of its current radius.
///
/// Unlike pan, a new drag delta replaces the prior velocity outright.
/// Spherical coordinates make pole avoidance a single scalar bound on
/// the polar angle, at the cost of an explicit clamp epsilon.
#[derive(Debug, Clone)]
pub struct Orbit {
    theta: DampedScalar,
    phi: DampedScalar,
}

impl Orbit {
    /// Resting orbit model sharing the pan damping tuning.
    #[must_use]
    pub fn new(deceleration: f32, snap: f32) -> Self {
        Self {
            theta: DampedScalar::new(deceleration, snap),
            phi: DampedScalar::new(deceleration, snap),
        }
    }

    /// Current `(azimuth, polar)` angular velocities.
    #[must_use]
    pub fn velocity(&self) -> (f32, f32) {
        (self.theta.get(), self.phi.get())
    }

    /// Record a drag intent, overwriting both angular velocities.
    ///
    /// The vertical delta is inverted so dragging up tilts the view up.
    pub fn on_rotate(&mut self, dx: f32, dy: f32) {
        self.theta.set(dx * ANGULAR_SCALE);
        self.phi.set(-dy * ANGULAR_SCALE);
    }

    /// Advance one tick of orbital motion around the origin.
    ///
    /// Resting velocities skip the step entirely, so idle frames do no
    /// trig work and never re-orient the camera.
    pub fn update(&mut self, camera: &mut dyn Camera) {
        if self.theta.at_rest() && self.phi.at_rest() {
            return;
        }

        let offset = camera.position();
        let radius = offset.length();
        if radius <= f32::EPSILON {
            // Sitting on the pivot: no orbit sphere to move along.
            self.theta.decay();
            self.phi.decay();
            return;
        }

        let theta = offset.x.atan2(offset.z) + self.theta.get();
        let phi = clamp(
            (offset.y / radius).acos() + self.phi.get(),
            MIN_PHI,
            MAX_PHI,
        );

        camera.set_position(Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        ));
        camera.look_at(Vec3::ZERO);

        self.theta.decay();
        self.phi.decay();
    }
}
