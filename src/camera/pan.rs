//! Velocity-based panning along the camera-local plane.

use glam::Vec3;

use crate::camera::core::Camera;
use crate::options::PanOptions;
use crate::util::damping::DampedScalar;

/// Pan model: held-key intents accelerate two damped velocities that
/// translate the camera along axes derived from its forward vector.
///
/// Both movement axes are camera-relative rather than world-aligned, so
/// panning feels the same at any orbit angle: horizontal is
/// `forward × world-up`, vertical is `forward × world-left`.
#[derive(Debug, Clone)]
pub struct Pan {
    options: PanOptions,
    horizontal: DampedScalar,
    vertical: DampedScalar,
}

impl Pan {
    /// Resting pan model with the given tuning.
    #[must_use]
    pub fn new(options: PanOptions) -> Self {
        let horizontal =
            DampedScalar::new(options.deceleration, options.snap);
        let vertical = DampedScalar::new(options.deceleration, options.snap);
        Self {
            options,
            horizontal,
            vertical,
        }
    }

    /// Current `(horizontal, vertical)` velocities.
    #[must_use]
    pub fn velocity(&self) -> (f32, f32) {
        (self.horizontal.get(), self.vertical.get())
    }

    /// Record a pan intent: one acceleration impulse per axis, clamped
    /// to the speed limit.
    ///
    /// Producers call this once per held-key per frame, which yields
    /// continuous acceleration up to `max_speed` while a key is down.
    pub fn pan(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal.impulse(
            horizontal * self.options.acceleration,
            self.options.max_speed,
        );
        self.vertical.impulse(
            vertical * self.options.acceleration,
            self.options.max_speed,
        );
    }

    /// Advance one tick: translate `camera`, then decay both velocities
    /// so the motion asymptotically comes to an exact rest.
    pub fn update(&mut self, camera: &mut dyn Camera) {
        let forward = camera.forward().normalize_or_zero();

        let horizontal_axis = forward.cross(Vec3::Y);
        camera.translate(horizontal_axis * self.horizontal.get());
        self.horizontal.decay();

        let vertical_axis = forward.cross(Vec3::NEG_X);
        camera.translate(vertical_axis * self.vertical.get());
        self.vertical.decay();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::ViewCamera;

    fn options(max_speed: f32, deceleration: f32, snap: f32) -> PanOptions {
        PanOptions {
            max_speed,
            acceleration: 1.0,
            deceleration,
            snap,
        }
    }

    fn test_camera() -> ViewCamera {
        ViewCamera::new(Vec3::ZERO, Vec3::NEG_Z)
    }

    #[test]
    fn pans_along_camera_local_axes() {
        for (horizontal, vertical) in [(1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            let mut camera = test_camera();
            let mut pan = Pan::new(options(f32::MAX, 0.0, 0.1));

            pan.pan(horizontal, vertical);
            pan.update(&mut camera);

            assert_eq!(camera.eye.x, horizontal);
            assert_eq!(camera.eye.y, vertical);
        }
    }

    #[test]
    fn respects_max_speed() {
        for max_speed in [0.0, 1.0, 100.0] {
            let mut camera = test_camera();
            let mut pan = Pan::new(options(max_speed, 0.0, 0.1));

            pan.pan(100.0, 100.0);
            pan.update(&mut camera);

            assert_eq!(camera.eye.x, max_speed);
            assert_eq!(camera.eye.y, max_speed);
        }
    }

    #[test]
    fn velocity_never_exceeds_max_speed() {
        let mut pan = Pan::new(options(2.0, 0.9, 0.0));
        for _ in 0..1000 {
            pan.pan(1e6, -1e6);
            let (h, v) = pan.velocity();
            assert!(h.abs() <= 2.0);
            assert!(v.abs() <= 2.0);
        }
    }

    #[test]
    fn full_deceleration_stops_after_one_tick() {
        let mut camera = test_camera();
        let mut pan = Pan::new(options(100.0, 0.0, 0.0));

        pan.pan(10.0, 0.0);
        let initial_x = camera.eye.x;

        pan.update(&mut camera);
        let first_x = camera.eye.x;

        pan.update(&mut camera);
        let second_x = camera.eye.x;

        assert!(first_x != initial_x);
        assert_eq!(second_x, first_x);
    }

    #[test]
    fn snaps_to_rest_below_threshold() {
        let mut camera = test_camera();
        let mut pan = Pan::new(options(100.0, 0.5, 1.0));

        pan.pan(2.0, 0.0);
        pan.update(&mut camera);
        let first_x = camera.eye.x;

        // 2.0 decayed to 1.0, which is at the snap threshold: rest.
        assert_eq!(pan.velocity(), (0.0, 0.0));

        pan.update(&mut camera);
        assert_eq!(camera.eye.x, first_x);
        assert_eq!(first_x, 2.0);
    }

    #[test]
    fn magnitude_decreases_every_tick_until_exact_rest() {
        let mut camera = test_camera();
        let mut pan = Pan::new(options(100.0, 0.75, 0.1));

        pan.pan(8.0, 0.0);
        let mut previous = pan.velocity().0.abs();
        let mut ticks = 0;
        loop {
            pan.update(&mut camera);
            let magnitude = pan.velocity().0.abs();
            if magnitude == 0.0 {
                break;
            }
            assert!(magnitude < previous);
            previous = magnitude;
            ticks += 1;
            assert!(ticks < 100, "pan velocity never reached rest");
        }
    }

    #[test]
    fn zero_max_speed_pins_camera() {
        let mut camera = test_camera();
        let mut pan = Pan::new(options(0.0, 0.9, 0.1));

        for _ in 0..10 {
            pan.pan(50.0, 50.0);
            pan.update(&mut camera);
        }
        assert_eq!(camera.eye, test_camera().eye);
    }
}
