//! UI event plumbing: a single-threaded pub/sub bus, pointer events and
//! outside-click detection built on top of it.

pub mod bus;
pub mod click_outside;
pub mod in_memory_bus;
pub mod pointer;

pub use bus::{Bus, Listener, Subscription};
pub use click_outside::{ClickOutside, ClickSide, Region, classify};
pub use in_memory_bus::InMemoryBus;
pub use pointer::PointerEvent;
