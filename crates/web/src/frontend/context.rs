//! Auth context shared through the Leptos component tree.

use std::rc::Rc;

use ghostui_auth::{AuthAction, AuthSource, AuthState, AuthStore, LogoutAction, LogoutCompletion};
use ghostui_core::AppConfig;
use leptos::*;

use crate::frontend::{api, session};
use crate::menu::{MenuState, MenuStateCell};

#[derive(Clone)]
pub struct AuthContext {
    pub store: AuthStore,
    /// Mirrors `store.state().is_authenticated` as a signal.
    pub is_authenticated: RwSignal<bool>,
    pub config: Rc<AppConfig>,
}

/// Create the auth store (restoring any saved session) and provide it to
/// descendants.
pub fn provide_auth_context(config: Rc<AppConfig>) -> AuthContext {
    let store = AuthStore::with_state(session::restore());
    let is_authenticated = create_rw_signal(store.is_authenticated());

    let subscription = store.subscribe(Rc::new(move |state: &AuthState| {
        is_authenticated.set(state.is_authenticated);
    }));
    on_cleanup(move || drop(subscription));

    let context = AuthContext {
        store,
        is_authenticated,
        config,
    };
    provide_context(context.clone());
    context
}

pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Reactive auth flag: reading it inside a view subscribes the view.
pub struct SignalAuth(pub RwSignal<bool>);

impl AuthSource for SignalAuth {
    fn is_authenticated(&self) -> bool {
        self.0.get()
    }
}

/// Menu state held in a signal.
pub struct SignalMenuState(pub RwSignal<MenuState>);

impl MenuStateCell for SignalMenuState {
    fn get(&self) -> MenuState {
        self.0.get()
    }

    fn set(&self, state: MenuState) {
        self.0.set(state);
    }
}

/// Logout through the backend, then clear the local session.
///
/// The store is told the logout completed whether or not the server call
/// succeeded; a stale server session must not keep the user signed in here.
pub struct BrowserLogout {
    store: AuthStore,
    config: Rc<AppConfig>,
}

impl BrowserLogout {
    pub fn new(store: AuthStore, config: Rc<AppConfig>) -> Self {
        Self { store, config }
    }
}

impl LogoutAction for BrowserLogout {
    fn logout_user_request(&self) -> LogoutCompletion {
        let completion = self.store.begin_logout();
        let store = self.store.clone();
        let url = self.config.api_url("/auth/logout");

        wasm_bindgen_futures::spawn_local(async move {
            let token = session::access_token();
            if let Err(err) = api::logout(&url, token.as_deref()).await {
                tracing::warn!(%err, "server logout failed; clearing local session anyway");
            }
            if !store.state().logout_pending {
                tracing::warn!("signed in again while logging out; keeping the new session");
                return;
            }
            session::clear();
            store.dispatch(AuthAction::LogoutCompleted);
        });

        completion
    }
}
