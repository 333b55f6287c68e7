//! Settings menu controller.
//!
//! Owns the menu's open/closed state and reacts to the three interactions the
//! menu supports: a click on its anchor, a click anywhere else, and selecting
//! the logout entry. Rendering is delegated to [`crate::view::render`].
//!
//! Collaborators are injected:
//!
//! - [`AuthSource`] decides whether anything is shown at all
//! - [`LogoutAction`] performs the logout and signals completion once
//! - [`Navigator`] moves to the login route after logout completes

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ghostui_auth::{AuthSource, LogoutAction, LogoutCompletion};
use ghostui_core::AppConfig;
use ghostui_events::{Bus, ClickOutside, PointerEvent, Region};

use crate::menu::{MenuState, MenuStateCell};
use crate::navigation::Navigator;
use crate::view::{self, SettingsView};

pub struct SettingsMenu<S: MenuStateCell = Cell<MenuState>> {
    auth: Rc<dyn AuthSource>,
    logout: Rc<dyn LogoutAction>,
    navigator: Rc<dyn Navigator>,
    config: Rc<AppConfig>,
    state: Rc<S>,
    click_outside: RefCell<Option<ClickOutside>>,
}

impl SettingsMenu<Cell<MenuState>> {
    pub fn new(
        auth: Rc<dyn AuthSource>,
        logout: Rc<dyn LogoutAction>,
        navigator: Rc<dyn Navigator>,
        config: Rc<AppConfig>,
    ) -> Self {
        Self::with_state(
            auth,
            logout,
            navigator,
            config,
            Rc::new(Cell::new(MenuState::Closed)),
        )
    }
}

impl<S: MenuStateCell + 'static> SettingsMenu<S> {
    /// Build a menu whose state lives in `state`. The cell should hold
    /// `MenuState::Closed` initially.
    pub fn with_state(
        auth: Rc<dyn AuthSource>,
        logout: Rc<dyn LogoutAction>,
        navigator: Rc<dyn Navigator>,
        config: Rc<AppConfig>,
        state: Rc<S>,
    ) -> Self {
        Self {
            auth,
            logout,
            navigator,
            config,
            state,
            click_outside: RefCell::new(None),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn on_anchor_click(&self) {
        toggle(&*self.state);
    }

    pub fn on_outside_interaction(&self) {
        dismiss(&*self.state);
    }

    /// Ask the auth subsystem to log out.
    ///
    /// Invokes the logout action exactly once. The returned navigation moves
    /// to the login route when the logout signals completion; it must be
    /// driven (awaited or spawned) for that to happen.
    pub fn on_logout_selected(&self) -> PendingNavigation {
        let completion = self.logout.logout_user_request();
        PendingNavigation {
            completion,
            navigator: Rc::clone(&self.navigator),
            path: self.config.routes.login.path.clone(),
        }
    }

    pub fn render(&self) -> Option<SettingsView> {
        view::render(self.auth.is_authenticated(), self.state(), &self.config)
    }

    /// Start outside-click detection on `bus`, with `region` covering the anchor.
    ///
    /// Clicks inside the region toggle the menu; clicks anywhere else close
    /// it. Replaces any earlier registration.
    pub fn mount<T, B, R>(&self, bus: &B, region: R)
    where
        T: 'static,
        B: Bus<PointerEvent<T>> + ?Sized,
        R: Region<T> + 'static,
    {
        let on_outside = {
            let state = Rc::clone(&self.state);
            move || dismiss(&*state)
        };
        let on_inside = {
            let state = Rc::clone(&self.state);
            move || toggle(&*state)
        };

        let guard = ClickOutside::attach(bus, region, on_outside, on_inside);
        *self.click_outside.borrow_mut() = Some(guard);
        tracing::debug!("settings menu mounted");
    }

    /// Stop outside-click detection. Dropping the menu does the same.
    pub fn unmount(&self) {
        if let Some(guard) = self.click_outside.borrow_mut().take() {
            guard.detach();
            tracing::debug!("settings menu unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.click_outside.borrow().is_some()
    }
}

fn toggle<S: MenuStateCell + ?Sized>(state: &S) {
    let next = state.get().toggled();
    tracing::debug!(?next, "settings menu toggled");
    state.set(next);
}

fn dismiss<S: MenuStateCell + ?Sized>(state: &S) {
    let current = state.get();
    if current.is_open() {
        tracing::debug!("settings menu dismissed");
    }
    state.set(current.dismissed());
}

impl<S: MenuStateCell> core::fmt::Debug for SettingsMenu<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SettingsMenu")
            .field("state", &self.state.get())
            .field("authenticated", &self.auth.is_authenticated())
            .field("mounted", &self.click_outside.borrow().is_some())
            .finish()
    }
}

/// Navigation to the login route, waiting on a logout to complete.
#[must_use = "navigation only happens once this is awaited or spawned"]
pub struct PendingNavigation {
    completion: LogoutCompletion,
    navigator: Rc<dyn Navigator>,
    path: String,
}

impl PendingNavigation {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Wait for the logout to complete, then navigate. Returns whether
    /// navigation happened.
    ///
    /// A completion dropped without firing is not a completion: nothing
    /// navigates.
    pub async fn finish(self) -> bool {
        match self.completion.await {
            Ok(()) => {
                tracing::info!(path = %self.path, "logout complete, navigating");
                self.navigator.navigate(&self.path);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "logout never completed; staying on current route");
                false
            }
        }
    }
}

impl core::fmt::Debug for PendingNavigation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PendingNavigation")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use ghostui_auth::{LogoutSignal, completion_pair};
    use ghostui_events::InMemoryBus;

    use super::*;

    /// Logout double that hands out completions and keeps their signals.
    #[derive(Default)]
    struct ManualLogout {
        signals: RefCell<Vec<LogoutSignal>>,
    }

    impl LogoutAction for ManualLogout {
        fn logout_user_request(&self) -> LogoutCompletion {
            let (signal, completion) = completion_pair();
            self.signals.borrow_mut().push(signal);
            completion
        }
    }

    fn menu(authenticated: bool) -> (SettingsMenu, Rc<ManualLogout>, Rc<RefCell<Vec<String>>>) {
        let logout = Rc::new(ManualLogout::default());
        let visited = Rc::new(RefCell::new(Vec::new()));
        let navigator = {
            let visited = visited.clone();
            move |path: &str| visited.borrow_mut().push(path.to_string())
        };
        let menu = SettingsMenu::new(
            Rc::new(authenticated),
            logout.clone(),
            Rc::new(navigator),
            Rc::new(AppConfig::default()),
        );
        (menu, logout, visited)
    }

    #[test]
    fn starts_closed_and_unmounted() {
        let (menu, _, _) = menu(true);
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_mounted());
    }

    #[test]
    fn outside_interaction_on_closed_menu_is_noop() {
        let (menu, _, _) = menu(true);
        menu.on_outside_interaction();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn state_is_tracked_while_hidden() {
        let (menu, _, _) = menu(false);
        menu.on_anchor_click();
        assert!(menu.is_open());
        assert!(menu.render().is_none());
    }

    #[test]
    fn mount_routes_bus_clicks() {
        let (menu, _, _) = menu(true);
        let bus = InMemoryBus::<PointerEvent<u32>>::new();
        menu.mount(&bus, |target: &u32| *target == 1);

        bus.publish(&PointerEvent::click(1));
        assert!(menu.is_open());

        bus.publish(&PointerEvent::click(2));
        assert!(!menu.is_open());
    }

    #[test]
    fn unmount_releases_listener() {
        let (menu, _, _) = menu(true);
        let bus = InMemoryBus::<PointerEvent<u32>>::new();
        menu.mount(&bus, |target: &u32| *target == 1);
        assert_eq!(bus.listener_count(), 1);

        menu.unmount();
        assert!(!menu.is_mounted());
        assert_eq!(bus.listener_count(), 0);

        bus.publish(&PointerEvent::click(1));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn dropping_menu_releases_listener() {
        let (menu, _, _) = menu(true);
        let bus = InMemoryBus::<PointerEvent<u32>>::new();
        menu.mount(&bus, |target: &u32| *target == 1);
        drop(menu);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn remount_replaces_registration() {
        let (menu, _, _) = menu(true);
        let bus = InMemoryBus::<PointerEvent<u32>>::new();
        menu.mount(&bus, |target: &u32| *target == 1);
        menu.mount(&bus, |target: &u32| *target == 1);
        assert_eq!(bus.listener_count(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn abandoned_logout_does_not_navigate() {
        let (menu, logout, visited) = menu(true);
        let pending = menu.on_logout_selected();
        logout.signals.borrow_mut().clear();

        assert!(!pending.finish().await);
        assert!(visited.borrow().is_empty());
    }

    #[test]
    fn pending_navigation_targets_login_path() {
        let (menu, _, _) = menu(true);
        let pending = menu.on_logout_selected();
        assert_eq!(pending.path(), "/");
    }
}
