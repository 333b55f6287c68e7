//! Outside-click detection over a pointer bus.
//!
//! A [`ClickOutside`] guard subscribes to pointer events for as long as it
//! lives and routes each event to one of two handlers depending on whether
//! the event target lies inside a tracked [`Region`].

use std::rc::Rc;

use crate::bus::{Bus, Subscription};
use crate::pointer::PointerEvent;

/// Containment predicate for a rendered element.
pub trait Region<T> {
    fn contains(&self, target: &T) -> bool;
}

impl<T, F> Region<T> for F
where
    F: Fn(&T) -> bool,
{
    fn contains(&self, target: &T) -> bool {
        self(target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSide {
    Inside,
    Outside,
}

pub fn classify<T, R>(region: &R, target: &T) -> ClickSide
where
    R: Region<T> + ?Sized,
{
    if region.contains(target) {
        ClickSide::Inside
    } else {
        ClickSide::Outside
    }
}

/// Live outside-click registration. Dropping it stops detection.
#[derive(Debug)]
#[must_use = "outside-click detection stops when the guard is dropped"]
pub struct ClickOutside {
    subscription: Subscription,
}

impl ClickOutside {
    /// Start routing pointer events from `bus`: clicks outside `region` call
    /// `on_outside`, clicks inside call `on_inside`.
    pub fn attach<T, B, R>(
        bus: &B,
        region: R,
        on_outside: impl Fn() + 'static,
        on_inside: impl Fn() + 'static,
    ) -> Self
    where
        T: 'static,
        B: Bus<PointerEvent<T>> + ?Sized,
        R: Region<T> + 'static,
    {
        let subscription = bus.subscribe(Rc::new(move |event: &PointerEvent<T>| {
            match classify(&region, &event.target) {
                ClickSide::Inside => on_inside(),
                ClickSide::Outside => on_outside(),
            }
        }));

        Self { subscription }
    }

    /// Stop detection now.
    pub fn detach(self) {
        self.subscription.cancel();
    }
}
