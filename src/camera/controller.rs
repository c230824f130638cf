//! Composition root wiring bus intents into the motion models.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::{EventBus, Subscription};
use crate::camera::core::Camera;
use crate::camera::events::{EdgePanEvent, RotateEvent, ZoomEvent};
use crate::camera::orbit::Orbit;
use crate::camera::pan::Pan;
use crate::camera::zoom::Zoom;
use crate::options::ControlOptions;

/// Per-frame driver owning one zoom, pan, and orbit model each.
///
/// Construction subscribes the models to the bus; intents arriving
/// between frames only record state. [`update`](Self::update) resolves
/// them into camera motion in a fixed order — zoom first, so pan and
/// orbit read a forward vector that already reflects this frame's
/// depth change.
///
/// Models are shared with the bus handlers through `Rc<RefCell<_>>`;
/// everything runs on the host's single render thread, and a publish
/// never interleaves with an in-progress `update`, so the borrows
/// cannot conflict.
pub struct CameraController {
    zoom: Rc<RefCell<Zoom>>,
    pan: Rc<RefCell<Pan>>,
    orbit: Rc<RefCell<Orbit>>,
    subscriptions: Vec<Subscription>,
}

impl CameraController {
    /// Attach a controller to `bus`, seeding the zoom model from
    /// `camera`'s current depth.
    ///
    /// Degenerate tuning is accepted, not rejected; an inverted zoom
    /// range is surfaced in the log because the resulting motion pins
    /// at `min`.
    pub fn new(
        bus: &mut EventBus,
        camera: &dyn Camera,
        options: ControlOptions,
    ) -> Self {
        if options.zoom.min > options.zoom.max {
            log::warn!(
                "zoom range is inverted (min {} > max {}); zoom will pin at min",
                options.zoom.min,
                options.zoom.max
            );
        }

        let zoom = Rc::new(RefCell::new(Zoom::new(
            camera.position().z,
            options.zoom,
        )));
        let orbit = Rc::new(RefCell::new(Orbit::new(
            options.pan.deceleration,
            options.pan.snap,
        )));
        let pan = Rc::new(RefCell::new(Pan::new(options.pan)));

        let subscriptions = vec![
            bus.subscribe({
                let zoom = Rc::clone(&zoom);
                move |event: &ZoomEvent| zoom.borrow_mut().on_zoom(event.delta)
            }),
            bus.subscribe({
                let pan = Rc::clone(&pan);
                move |event: &EdgePanEvent| {
                    pan.borrow_mut().pan(event.dx, event.dy);
                }
            }),
            bus.subscribe({
                let orbit = Rc::clone(&orbit);
                move |event: &RotateEvent| {
                    orbit.borrow_mut().on_rotate(event.dx, event.dy);
                }
            }),
        ];

        log::debug!(
            "camera controller attached ({} bus subscriptions)",
            subscriptions.len()
        );

        Self {
            zoom,
            pan,
            orbit,
            subscriptions,
        }
    }

    /// Advance all three models one frame, in fixed order: zoom (depth)
    /// resolves before pan and orbit read the forward vector.
    pub fn update(&mut self, camera: &mut dyn Camera) {
        self.zoom.borrow_mut().update(camera);
        self.pan.borrow_mut().update(camera);
        self.orbit.borrow_mut().update(camera);
    }

    /// Unsubscribe every handler, leaving the controller inert.
    ///
    /// Safe to call more than once; required before dropping a
    /// controller that should stop reacting to bus traffic (e.g. on
    /// scene reload).
    pub fn detach(&mut self, bus: &mut EventBus) {
        for subscription in self.subscriptions.drain(..) {
            bus.unsubscribe(subscription);
        }
        log::debug!("camera controller detached");
    }
}
