//! Camera control: intent events, motion models, and the per-frame
//! controller that composes them.
//!
//! Models never move the camera when an intent arrives; they record it
//! and resolve it at the next tick, which keeps motion deterministic at
//! frame boundaries no matter how input events are interleaved.

/// Composition root driving zoom, pan, and orbit each frame.
pub mod controller;
/// Camera accessor contract and a concrete look-at rig.
pub mod core;
/// Bus event catalog for camera intents.
pub mod events;
/// Spherical-orbit rotation model.
pub mod orbit;
/// Velocity-based pan model.
pub mod pan;
/// Target-seeking zoom model.
pub mod zoom;

pub use controller::CameraController;
pub use core::{Camera, ViewCamera};
pub use events::{Direction, EdgePanEvent, RotateEvent, ZoomEvent};
pub use orbit::Orbit;
pub use pan::Pan;
pub use zoom::Zoom;
