//! Typed, in-process publish/subscribe event bus.
//!
//! The bus is an explicit object owned by the composition root and
//! injected into producers and consumers; it holds no camera or scene
//! state of its own. Delivery is synchronous on the publisher's call
//! stack, and handler panics are deliberately not caught: a panicking
//! subscriber aborts the current dispatch and surfaces at whatever
//! drives the frame loop.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

/// Marker trait binding an event type to its payload shape.
///
/// Payloads are plain structs; [`EventBus::subscribe`] and
/// [`EventBus::publish`] are generic over the event type, so a handler
/// can only be registered for — and invoked with — the payload it was
/// declared for.
pub trait BusEvent: Any {}

type ErasedHandler = Box<dyn Fn(&dyn Any)>;

/// Handle returned by [`EventBus::subscribe`], consumed by
/// [`EventBus::unsubscribe`].
///
/// Every registration gets its own token, so re-registering "the same"
/// handler is a distinct subscription rather than a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    channel: TypeId,
    id: u64,
}

/// In-process publish/subscribe registry with one channel per event type.
#[derive(Default)]
pub struct EventBus {
    channels: FxHashMap<TypeId, Vec<(u64, ErasedHandler)>>,
    next_id: u64,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of type `E`.
    ///
    /// Any number of handlers may share a channel; subscribing to an
    /// event nothing publishes yet is fine.
    pub fn subscribe<E, F>(&mut self, handler: F) -> Subscription
    where
        E: BusEvent,
        F: Fn(&E) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        let erased: ErasedHandler = Box::new(move |payload| {
            if let Some(event) = payload.downcast_ref::<E>() {
                handler(event);
            }
        });
        self.channels
            .entry(TypeId::of::<E>())
            .or_default()
            .push((id, erased));

        Subscription {
            channel: TypeId::of::<E>(),
            id,
        }
    }

    /// Remove a previously registered handler.
    ///
    /// A no-op when the token was already unsubscribed. Removing the
    /// last handler of a channel drops the channel entry itself, not
    /// just its contents.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        if let Some(handlers) = self.channels.get_mut(&subscription.channel) {
            handlers.retain(|(id, _)| *id != subscription.id);
            if handlers.is_empty() {
                let _ = self.channels.remove(&subscription.channel);
            }
        }
    }

    /// Deliver `event` to every handler registered for `E`,
    /// synchronously, on this call stack.
    ///
    /// Iteration follows registration order, but no consumer may depend
    /// on it. Zero subscribers is a no-op, never an error.
    pub fn publish<E: BusEvent>(&self, event: &E) {
        if let Some(handlers) = self.channels.get(&TypeId::of::<E>()) {
            for (_, handler) in handlers {
                handler(event);
            }
        }
    }

    /// Number of handlers currently registered for `E`.
    #[must_use]
    pub fn subscriber_count<E: BusEvent>(&self) -> usize {
        self.channels.get(&TypeId::of::<E>()).map_or(0, Vec::len)
    }
}
