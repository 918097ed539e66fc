//! Pub/Sub event bus for player notifications.
//!
//! - Observers subscribe to an event type with a callback (invoked on emit)
//! - emit() invokes callbacks immediately AND queues the event
//! - poll() drains the queue for batch processing in a UI loop
//!
//! Callback order: FIFO within one event type. No ordering across types.
//! Callbacks are cloned out before invocation, so a callback may subscribe,
//! emit, or query the player that owns the bus.
//!
//! Single-threaded like the player: callbacks are plain `Fn(&E) + 'static`
//! and may capture `Rc` handles, including a clone of the player.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

/// Maximum events in queue before oldest are evicted
const MAX_QUEUE_SIZE: usize = 1000;

/// Marker trait for events. Any `'static` type qualifies.
pub trait Event: Any + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

type Callback = Rc<dyn Fn(&dyn Any)>;

/// Boxed event for queue storage
pub type BoxedEvent = Box<dyn Event>;

#[derive(Default)]
struct Inner {
    subscribers: RefCell<HashMap<TypeId, Vec<Callback>>>,
    queue: RefCell<Vec<BoxedEvent>>,
}

impl Inner {
    fn callbacks(&self, type_id: TypeId) -> Vec<Callback> {
        self.subscribers
            .borrow()
            .get(&type_id)
            .cloned()
            .unwrap_or_default()
    }

    fn enqueue(&self, event: BoxedEvent) {
        let mut queue = self.queue.borrow_mut();
        if queue.len() >= MAX_QUEUE_SIZE {
            let evict_count = queue.len() / 2;
            warn!("EventBus queue full ({} events), evicting oldest {}", queue.len(), evict_count);
            queue.drain(0..evict_count);
        }
        queue.push(event);
    }

    fn publish(&self, event: BoxedEvent) {
        // Deref to dyn Event so as_any() sees the concrete type, not the Box
        let type_id = (*event).as_any().type_id();
        for cb in self.callbacks(type_id) {
            cb((*event).as_any());
        }
        self.enqueue(event);
    }
}

/// Shared pub/sub bus. Clones share subscribers and queue.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<Inner>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field(
                "subscriber_types",
                &self.inner.subscribers.borrow().len(),
            )
            .field("queue_len", &self.queue_len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events of type E. Callback runs synchronously inside emit().
    pub fn subscribe<E, F>(&self, callback: F)
    where
        E: Event,
        F: Fn(&E) + 'static,
    {
        let wrapped: Callback = Rc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                callback(event);
            }
        });
        self.inner
            .subscribers
            .borrow_mut()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Invoke subscribers, then queue for poll()
    pub fn emit<E: Event>(&self, event: E) {
        self.inner.publish(Box::new(event));
    }

    /// Drain all events emitted since the last poll
    pub fn poll(&self) -> Vec<BoxedEvent> {
        self.inner.queue.take()
    }

    /// Remove all subscribers for type E
    pub fn unsubscribe_all<E: Event>(&self) {
        self.inner
            .subscribers
            .borrow_mut()
            .remove(&TypeId::of::<E>());
    }

    pub fn has_subscribers<E: Event>(&self) -> bool {
        self.inner
            .subscribers
            .borrow()
            .get(&TypeId::of::<E>())
            .is_some_and(|v| !v.is_empty())
    }

    pub fn queue_len(&self) -> usize {
        self.inner.queue.borrow().len()
    }
}

/// Downcast a polled event to a concrete type
///
/// Explicit deref to `dyn Event` is required: the blanket impl would otherwise
/// match `Box<dyn Event>` itself and the downcast would always fail.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}
