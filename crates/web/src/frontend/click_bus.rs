//! Bridges window click events onto a pointer bus.

use ghostui_events::{Bus, InMemoryBus, PointerEvent};
use leptos::on_cleanup;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Bubbles to the window after handlers on the clicked element have run, so an
/// entry's own handler still fires when the same click closes the menu.
const CLICK: &str = "click";

/// Pointer bus fed by `click` events on the window, for the lifetime of the
/// calling component.
pub fn use_click_bus() -> InMemoryBus<PointerEvent<web_sys::Node>> {
    let bus = InMemoryBus::new();

    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; outside-click detection disabled");
        return bus;
    };

    let forward = {
        let bus = bus.clone();
        Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            if let Some(node) = target {
                bus.publish(&PointerEvent::click(node));
            }
        })
    };

    let callback = forward.as_ref().unchecked_ref();
    if let Err(err) = window.add_event_listener_with_callback(CLICK, callback) {
        tracing::warn!(?err, "failed to register window listener");
        return bus;
    }

    on_cleanup(move || {
        let _ = window.remove_event_listener_with_callback(CLICK, forward.as_ref().unchecked_ref());
    });

    bus
}
