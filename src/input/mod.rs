//! Input capture boundary: platform-agnostic events and the processor
//! that turns them into published camera intents.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into bus publishes.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings};
