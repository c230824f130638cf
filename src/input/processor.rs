//! Converts raw platform events into published camera intents.
//!
//! The `InputProcessor` owns all transient input state (held pan keys,
//! pointer tracking, button state) and the key-binding map. Wheel and
//! drag intents publish as they arrive; held-key panning publishes from
//! the per-frame [`pump`](InputProcessor::pump), so a held key produces
//! one acceleration impulse per frame for as long as it stays down.

use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::bus::EventBus;
use crate::camera::events::{Direction, EdgePanEvent, RotateEvent, ZoomEvent};

/// Maps physical key strings to pan [`Direction`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ArrowLeft"`, etc. Serde serializes directions as
/// `snake_case` strings so TOML presets stay readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → pan direction.
    bindings: FxHashMap<String, Direction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = FxHashMap::from_iter([
            ("KeyW".into(), Direction::North),
            ("KeyA".into(), Direction::West),
            ("KeyS".into(), Direction::South),
            ("KeyD".into(), Direction::East),
            ("ArrowUp".into(), Direction::North),
            ("ArrowLeft".into(), Direction::West),
            ("ArrowDown".into(), Direction::South),
            ("ArrowRight".into(), Direction::East),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the pan direction bound to a physical key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Direction> {
        self.bindings.get(key).copied()
    }
}

/// Publishes camera intents in response to raw input.
pub struct InputProcessor {
    bindings: KeyBindings,
    held: FxHashSet<Direction>,
    cursor: Vec2,
    mouse_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with the default WASD/arrow bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::default(),
            held: FxHashSet::default(),
            cursor: Vec2::ZERO,
            mouse_pressed: false,
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Whether the primary mouse button is currently held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Process one raw event, publishing any immediate intent onto
    /// `bus`.
    pub fn handle_event(&mut self, event: &InputEvent, bus: &EventBus) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let position = Vec2::new(*x, *y);
                let delta = position - self.cursor;
                self.cursor = position;

                if self.mouse_pressed {
                    bus.publish(&RotateEvent {
                        dx: delta.x,
                        dy: delta.y,
                    });
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                if *button == MouseButton::Left {
                    self.mouse_pressed = *pressed;
                }
            }
            InputEvent::Scroll { delta } => {
                bus.publish(&ZoomEvent { delta: *delta });
            }
            InputEvent::Key { key, pressed } => {
                self.handle_key(key, *pressed);
            }
        }
    }

    /// Publish one pan impulse per held direction; call once per frame.
    pub fn pump(&self, bus: &EventBus) {
        for direction in &self.held {
            bus.publish(&EdgePanEvent::from(*direction));
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(direction) = self.bindings.lookup(key) else {
            return;
        };
        if pressed {
            let _ = self.held.insert(direction);
        } else {
            let _ = self.held.remove(&direction);
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
