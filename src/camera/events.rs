//! Bus event catalog for camera intents.
//!
//! Producers (input capture, scripts, UI) publish these; the
//! [`CameraController`](super::controller::CameraController) routes them
//! into its models. Intent events carry the request only — nothing
//! moves until the next frame tick.

use serde::{Deserialize, Serialize};

use crate::bus::BusEvent;

/// Request to change the camera's depth by a wheel-style delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomEvent {
    /// Raw scroll delta; positive zooms out, negative zooms in.
    pub delta: f32,
}

/// Request to pan along the camera-local plane.
///
/// Carries raw deltas; four-way key input converts through
/// [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePanEvent {
    /// Signed horizontal input, camera-right positive.
    pub dx: f32,
    /// Signed vertical input, camera-up positive.
    pub dy: f32,
}

/// Request to orbit the camera by a pointer-drag delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateEvent {
    /// Horizontal drag delta in pixels.
    pub dx: f32,
    /// Vertical drag delta in pixels.
    pub dy: f32,
}

impl BusEvent for ZoomEvent {}
impl BusEvent for EdgePanEvent {}
impl BusEvent for RotateEvent {}

/// Four-way pan vocabulary used by keyboard-style producers.
///
/// North/South map to the camera-local vertical axis, East/West to the
/// horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Screen-up.
    North,
    /// Screen-down.
    South,
    /// Screen-right.
    East,
    /// Screen-left.
    West,
}

impl Direction {
    /// Unit pan deltas for this direction, as `(dx, dy)`.
    #[must_use]
    pub fn offsets(self) -> (f32, f32) {
        match self {
            Self::North => (0.0, 1.0),
            Self::South => (0.0, -1.0),
            Self::East => (1.0, 0.0),
            Self::West => (-1.0, 0.0),
        }
    }
}

impl From<Direction> for EdgePanEvent {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.offsets();
        Self { dx, dy }
    }
}
