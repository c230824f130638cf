//! Target-seeking zoom along the camera's forward axis.

use crate::camera::core::Camera;
use crate::options::ZoomOptions;
use crate::util::damping::clamp;

/// Zoom model: wheel intents move a target depth; each tick the camera
/// glides toward it along its own view axis.
///
/// Intents accumulate onto the *target*, never directly onto the live
/// value, which is what produces smooth catch-up instead of
/// frame-skipping jumps. The glide is first-order exponential
/// smoothing — the step is proportional to the remaining gap, so the
/// approach is monotonic and never overshoots.
#[derive(Debug, Clone)]
pub struct Zoom {
    options: ZoomOptions,
    current: f32,
    target: f32,
}

impl Zoom {
    /// Model seeded at `initial`, the camera's depth at attach time.
    #[must_use]
    pub fn new(initial: f32, options: ZoomOptions) -> Self {
        Self {
            options,
            current: initial,
            target: initial,
        }
    }

    /// Live depth value.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Most recently requested resting depth.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Record a zoom intent, accumulating onto the clamped target.
    ///
    /// Extreme deltas clamp to exactly `min`/`max` here, in one step.
    pub fn on_zoom(&mut self, delta: f32) {
        let scaled = delta * self.options.scale;
        self.target =
            clamp(self.target + scaled, self.options.min, self.options.max);
    }

    /// Advance one tick, translating `camera` along its forward axis.
    ///
    /// Inside the snap window the remaining gap collapses without
    /// touching the camera, so an idle model never drifts
    /// sub-threshold.
    pub fn update(&mut self, camera: &mut dyn Camera) {
        if (self.target - self.current).abs() <= self.options.snap {
            self.current = self.target;
            return;
        }

        let forward = camera.forward().normalize_or_zero();

        let previous = self.current;
        self.current += (self.target - self.current) * self.options.scale;

        camera.translate(forward * (previous - self.current));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::ViewCamera;

    fn wide_open() -> ZoomOptions {
        ZoomOptions {
            scale: 1.0,
            min: -100.0,
            max: 100.0,
            snap: 0.1,
        }
    }

    /// Rig matching the pose the model is seeded from: at the origin,
    /// looking down -Z.
    fn test_camera() -> ViewCamera {
        ViewCamera::new(Vec3::ZERO, Vec3::NEG_Z)
    }

    #[test]
    fn zooms_in() {
        let mut camera = test_camera();
        let mut zoom = Zoom::new(camera.eye.z, wide_open());

        zoom.on_zoom(-10.0);
        zoom.update(&mut camera);

        assert_eq!(camera.eye.z, -10.0);
        assert_eq!(zoom.current(), -10.0);
    }

    #[test]
    fn zooms_out() {
        let mut camera = test_camera();
        let mut zoom = Zoom::new(camera.eye.z, wide_open());

        zoom.on_zoom(10.0);
        zoom.update(&mut camera);

        assert_eq!(camera.eye.z, 10.0);
    }

    #[test]
    fn clamps_at_maximum() {
        let mut camera = test_camera();
        let mut zoom = Zoom::new(camera.eye.z, wide_open());

        zoom.on_zoom(f32::MAX);
        zoom.update(&mut camera);

        assert_eq!(zoom.target(), 100.0);
        assert_eq!(camera.eye.z, 100.0);
    }

    #[test]
    fn clamps_at_minimum() {
        let mut camera = test_camera();
        let mut zoom = Zoom::new(camera.eye.z, wide_open());

        zoom.on_zoom(f32::MIN);
        zoom.update(&mut camera);

        assert_eq!(zoom.target(), -100.0);
        assert_eq!(camera.eye.z, -100.0);
    }

    #[test]
    fn intents_accumulate_between_ticks() {
        let mut camera = test_camera();
        let mut zoom = Zoom::new(camera.eye.z, wide_open());

        zoom.on_zoom(3.0);
        zoom.on_zoom(4.0);
        assert_eq!(zoom.target(), 7.0);

        zoom.update(&mut camera);
        assert_eq!(camera.eye.z, 7.0);
    }

    #[test]
    fn converges_proportional_to_scale() {
        let mut camera = test_camera();
        let options = ZoomOptions {
            scale: 0.25,
            ..wide_open()
        };
        let mut zoom = Zoom::new(camera.eye.z, options.clone());

        zoom.on_zoom(40.0);
        assert_eq!(zoom.target(), 10.0);

        for _ in 0..100 {
            zoom.update(&mut camera);
        }
        // The camera settles once the remaining gap enters the snap
        // window; the model itself locks onto the target exactly.
        assert!((camera.eye.z - 10.0).abs() <= options.snap);
        assert_eq!(zoom.current(), zoom.target());
    }

    #[test]
    fn approach_is_monotonic() {
        let mut camera = test_camera();
        let options = ZoomOptions {
            scale: 0.25,
            ..wide_open()
        };
        let mut zoom = Zoom::new(camera.eye.z, options);

        zoom.on_zoom(40.0);
        let mut previous_gap = (zoom.target() - zoom.current()).abs();
        for _ in 0..50 {
            zoom.update(&mut camera);
            let gap = (zoom.target() - zoom.current()).abs();
            assert!(gap <= previous_gap);
            assert!(zoom.current() <= zoom.target());
            previous_gap = gap;
        }
    }

    #[test]
    fn snap_window_freezes_camera() {
        let mut camera = test_camera();
        let options = ZoomOptions {
            scale: 1.0,
            min: -100.0,
            max: 100.0,
            snap: 0.5,
        };
        let mut zoom = Zoom::new(camera.eye.z, options);

        zoom.on_zoom(0.3);
        let before = camera.eye;
        zoom.update(&mut camera);

        assert_eq!(camera.eye, before);
        assert_eq!(zoom.current(), zoom.target());
    }

    #[test]
    fn inverted_range_pins_without_crashing() {
        let mut camera = test_camera();
        let options = ZoomOptions {
            scale: 1.0,
            min: 10.0,
            max: -10.0,
            snap: 0.1,
        };
        let mut zoom = Zoom::new(0.0, options);

        zoom.on_zoom(50.0);
        assert_eq!(zoom.target(), 10.0);
        zoom.update(&mut camera);
        zoom.update(&mut camera);
        assert_eq!(zoom.current(), 10.0);
    }
}
