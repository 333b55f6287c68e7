//! Event publishing/subscription abstraction (mechanics only).
//!
//! This module provides the **event bus pattern** used inside the client shell:
//! a pub/sub mechanism that fans pointer events and store notifications out to
//! whichever components are currently mounted.
//!
//! ## Execution Model
//!
//! The bus lives on the UI thread:
//!
//! - **Single-threaded**: Listeners are `Rc<dyn Fn>`; nothing here is `Send`
//! - **Synchronous delivery**: `publish()` calls every listener before returning
//! - **Scoped registration**: A [`Subscription`] unregisters its listener when dropped
//!
//! Components acquire a subscription when they mount and hold it for exactly as
//! long as they are mounted. Dropping the handle is the release.

use std::rc::Rc;

/// A listener registered on a bus.
pub type Listener<E> = Rc<dyn Fn(&E)>;

/// Handle to a registered listener.
///
/// ## Usage Pattern
///
/// ```ignore
/// let bus = InMemoryBus::new();
/// let subscription = bus.subscribe(Rc::new(|event: &PointerEvent<NodeId>| { ... }));
///
/// bus.publish(&event);   // listener runs
/// drop(subscription);    // listener removed
/// bus.publish(&event);   // listener no longer runs
/// ```
///
/// ## Lifetime
///
/// The handle does not keep the bus alive. If the bus is dropped first, dropping
/// the handle is a no-op.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unregister now (equivalent to dropping the handle).
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Transport-agnostic event bus (pub/sub abstraction).
///
/// ## Design Principles
///
/// - **Lightweight contract**: `publish` and `subscribe`, nothing else
/// - **Broadcast semantics**: Every live listener sees every published event
/// - **No buffering**: Events published while nobody listens are dropped
///
/// ## Re-entrancy
///
/// Listeners may subscribe, unsubscribe or publish from inside a callback.
/// Implementations must snapshot the listener set before delivering, so such
/// changes take effect from the next `publish()`.
pub trait Bus<E> {
    /// Deliver `event` to every registered listener. Returns the number of
    /// listeners that received it.
    fn publish(&self, event: &E) -> usize;

    fn subscribe(&self, listener: Listener<E>) -> Subscription;
}

impl<E, B> Bus<E> for Rc<B>
where
    B: Bus<E> + ?Sized,
{
    fn publish(&self, event: &E) -> usize {
        (**self).publish(event)
    }

    fn subscribe(&self, listener: Listener<E>) -> Subscription {
        (**self).subscribe(listener)
    }
}
