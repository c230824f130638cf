// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Event-driven camera control core for interactive 3D viewers.
//!
//! Gimbal turns discrete user intents (pan, zoom, orbit) into smooth,
//! frame-by-frame camera motion, decoupled from input capture and from
//! the renderer by a typed publish/subscribe event bus.
//!
//! # Key entry points
//!
//! - [`bus::EventBus`] - typed in-process publish/subscribe dispatch
//! - [`camera::CameraController`] - composition root and per-frame driver
//! - [`camera::Camera`] - the accessor contract a host renderer implements
//! - [`options::ControlOptions`] - runtime tuning with TOML preset support
//! - [`input::InputProcessor`] - translates raw window events into intents
//!
//! # Architecture
//!
//! Producers publish intent events onto the bus; the controller's
//! subscriptions route them into the zoom, pan, and orbit models, which
//! only *record* the request. Once per animation frame the host calls
//! [`CameraController::update`](camera::CameraController::update), which
//! resolves all pending intent into camera motion in a fixed order —
//! zoom first, so pan and orbit derive their axes from a forward vector
//! that already reflects this frame's depth change.
//!
//! ```ignore
//! let mut bus = EventBus::new();
//! let mut camera = ViewCamera::default();
//! let mut controller =
//!     CameraController::new(&mut bus, &camera, ControlOptions::default());
//!
//! // In the input path:
//! bus.publish(&ZoomEvent { delta: -40.0 });
//!
//! // Once per animation frame:
//! controller.update(&mut camera);
//! ```

pub mod bus;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
