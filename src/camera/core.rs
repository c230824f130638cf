use glam::{Mat4, Vec3};

/// Mutable camera surface the motion models drive.
///
/// The host renderer owns the camera; the control core reads its pose
/// and writes back translations and re-orientations through this trait,
/// once per tick. Nothing here constructs or destroys a camera.
pub trait Camera {
    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Normalized view direction.
    fn forward(&self) -> Vec3;

    /// Move the camera by `offset`, keeping its orientation.
    fn translate(&mut self, offset: Vec3);

    /// Move the camera to `position`, keeping its orientation.
    fn set_position(&mut self, position: Vec3);

    /// Re-orient the camera to look at `target`.
    fn look_at(&mut self, target: Vec3);
}

/// Look-at camera rig defined by eye position, target, and up vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl ViewCamera {
    /// Create a rig at `eye` looking toward `target`, with +Y up.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
        }
    }

    /// Build the world-to-view matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Default for ViewCamera {
    /// Rig at `(0, 0, 50)` looking at the origin.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO)
    }
}

impl Camera for ViewCamera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn forward(&self) -> Vec3 {
        // Degenerate pose (eye on target) still needs a direction.
        (self.target - self.eye).normalize_or(Vec3::NEG_Z)
    }

    fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.target += offset;
    }

    fn set_position(&mut self, position: Vec3) {
        let offset = position - self.eye;
        self.translate(offset);
    }

    fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
}
