//! Settings menu behaviour against the in-memory auth store and pointer bus.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ghostui_auth::{AuthAction, AuthState, AuthStore, LogoutAction, LogoutCompletion};
use ghostui_core::AppConfig;
use ghostui_events::{Bus, InMemoryBus, PointerEvent};
use ghostui_web::{EntryAction, EntryKind, MenuState, SettingsMenu, render};
use proptest::prelude::*;

const ANCHOR: u32 = 1;
const PAGE: u32 = 42;

/// Counts requests and forwards them to the store.
struct CountingLogout {
    store: AuthStore,
    calls: Cell<usize>,
}

impl LogoutAction for CountingLogout {
    fn logout_user_request(&self) -> LogoutCompletion {
        self.calls.set(self.calls.get() + 1);
        self.store.logout_user_request()
    }
}

struct Harness {
    store: AuthStore,
    logout: Rc<CountingLogout>,
    visited: Rc<RefCell<Vec<String>>>,
    bus: InMemoryBus<PointerEvent<u32>>,
    menu: SettingsMenu,
}

fn harness(state: AuthState) -> Harness {
    ghostui_observability::tracing::init_for_tests();

    let store = AuthStore::with_state(state);
    let logout = Rc::new(CountingLogout {
        store: store.clone(),
        calls: Cell::new(0),
    });
    let visited = Rc::new(RefCell::new(Vec::new()));
    let navigator = {
        let visited = visited.clone();
        move |path: &str| visited.borrow_mut().push(path.to_string())
    };

    let menu = SettingsMenu::new(
        Rc::new(store.clone()),
        logout.clone(),
        Rc::new(navigator),
        Rc::new(AppConfig::default()),
    );
    let bus = InMemoryBus::<PointerEvent<u32>>::new();
    menu.mount(&bus, |target: &u32| *target == ANCHOR);

    Harness {
        store,
        logout,
        visited,
        bus,
        menu,
    }
}

fn signed_in() -> Harness {
    harness(AuthState::signed_in("admin"))
}

#[test]
fn closed_menu_shows_only_trigger() {
    let h = signed_in();
    let view = h.menu.render().expect("authenticated users see the trigger");

    assert_eq!(view.state, MenuState::Closed);
    assert_eq!(view.container_class(), "fixed-plugin");
    assert!(view.menu().is_none());
}

#[test]
fn anchor_click_opens_menu_with_three_entries_in_order() {
    let h = signed_in();
    h.bus.publish(&PointerEvent::click(ANCHOR));

    assert_eq!(h.menu.state(), MenuState::Open);
    let view = h.menu.render().unwrap();
    assert_eq!(view.container_class(), "fixed-plugin fixed-plugin-active");

    let entries = view.menu().unwrap();
    let kinds: Vec<EntryKind> = entries.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EntryKind::HealthChecks, EntryKind::SwaggerApi, EntryKind::Logout]
    );
    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Health Checks", "Swagger API", "Logout"]);
    assert_eq!(entries[2].action, EntryAction::Logout);
}

#[test]
fn outside_click_closes_open_menu() {
    let h = signed_in();
    h.menu.on_anchor_click();
    assert!(h.menu.is_open());

    h.bus.publish(&PointerEvent::click(PAGE));

    assert_eq!(h.menu.state(), MenuState::Closed);
    assert!(h.menu.render().unwrap().menu().is_none());
}

#[test]
fn second_anchor_click_closes_menu() {
    let h = signed_in();
    h.bus.publish(&PointerEvent::click(ANCHOR));
    h.bus.publish(&PointerEvent::click(ANCHOR));
    assert_eq!(h.menu.state(), MenuState::Closed);
}

#[test]
fn signed_out_renders_nothing_even_when_open() {
    let h = harness(AuthState::default());
    h.menu.on_anchor_click();
    assert!(h.menu.is_open());
    assert!(h.menu.render().is_none());
}

#[test]
fn menu_disappears_when_store_signs_out() {
    let h = signed_in();
    h.menu.on_anchor_click();
    assert!(h.menu.render().is_some());

    h.store.dispatch(AuthAction::LogoutCompleted);
    assert!(h.menu.render().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn logout_calls_action_once_and_navigates_once_after_completion() {
    let h = signed_in();
    h.menu.on_anchor_click();

    let pending = h.menu.on_logout_selected();
    assert_eq!(h.logout.calls.get(), 1);
    assert!(h.visited.borrow().is_empty());
    assert!(h.store.state().logout_pending);

    h.store.dispatch(AuthAction::LogoutCompleted);
    assert!(pending.finish().await);

    assert_eq!(*h.visited.borrow(), vec!["/".to_string()]);
    assert!(h.menu.render().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn each_logout_click_invokes_action_once() {
    let h = signed_in();
    let first = h.menu.on_logout_selected();
    let second = h.menu.on_logout_selected();
    assert_eq!(h.logout.calls.get(), 2);

    h.store.dispatch(AuthAction::LogoutCompleted);
    assert!(first.finish().await);
    assert!(second.finish().await);
    assert_eq!(h.visited.borrow().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn logout_from_earlier_session_does_not_navigate_after_relogin() {
    let h = signed_in();
    let stale = h.menu.on_logout_selected();

    h.store.dispatch(AuthAction::LoginSucceeded {
        user_name: "bob".to_string(),
    });
    let current = h.menu.on_logout_selected();
    h.store.dispatch(AuthAction::LogoutCompleted);

    assert!(!stale.finish().await);
    assert!(current.finish().await);
    assert_eq!(*h.visited.borrow(), vec!["/".to_string()]);
}

#[test]
fn unmounted_menu_ignores_clicks() {
    let h = signed_in();
    h.menu.unmount();
    h.bus.publish(&PointerEvent::click(ANCHOR));
    assert_eq!(h.menu.state(), MenuState::Closed);
    assert_eq!(h.bus.listener_count(), 0);
}

#[derive(Debug, Clone, Copy)]
enum Interaction {
    Anchor,
    Outside,
}

fn interaction() -> impl Strategy<Value = Interaction> {
    prop_oneof![Just(Interaction::Anchor), Just(Interaction::Outside)]
}

proptest! {
    #[test]
    fn unauthenticated_render_is_always_empty(open in any::<bool>()) {
        prop_assert!(render(false, MenuState::from(open), &AppConfig::default()).is_none());
    }

    #[test]
    fn menu_state_follows_two_state_machine(steps in prop::collection::vec(interaction(), 0..32)) {
        let h = signed_in();
        let mut expected = MenuState::Closed;

        for step in steps {
            match step {
                Interaction::Anchor => {
                    h.bus.publish(&PointerEvent::click(ANCHOR));
                    expected = expected.toggled();
                }
                Interaction::Outside => {
                    h.bus.publish(&PointerEvent::click(PAGE));
                    expected = MenuState::Closed;
                }
            }
            prop_assert_eq!(h.menu.state(), expected);
        }

        let view = h.menu.render().unwrap();
        prop_assert_eq!(view.menu().map(|entries| entries.len()), expected.is_open().then_some(3));
    }
}
