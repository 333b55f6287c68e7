//! In-memory event bus for the UI thread.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::bus::{Bus, Listener, Subscription};

struct Registry<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Synchronous fan-out in registration order
/// - Clones share the same listener set
pub struct InMemoryBus<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> InMemoryBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl<E> Default for InMemoryBus<E> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }
}

impl<E> Clone for InMemoryBus<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> core::fmt::Debug for InMemoryBus<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<E: 'static> Bus<E> for InMemoryBus<E> {
    fn publish(&self, event: &E) -> usize {
        // Snapshot so listeners can (un)subscribe while being called.
        let listeners: Vec<Listener<E>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in &listeners {
            listener(event);
        }

        listeners.len()
    }

    fn subscribe(&self, listener: Listener<E>) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener));
            id
        };
        tracing::trace!(listener_id = id, "bus listener registered");

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                tracing::trace!(listener_id = id, "bus listener released");
            }
        })
    }
}
