//! Client-side auth store: the single source of truth for auth status.

use std::cell::RefCell;
use std::rc::Rc;

use ghostui_events::{Bus, InMemoryBus, Listener, Subscription};

use crate::action::{AuthAction, reduce};
use crate::logout::{LogoutAction, LogoutCompletion, LogoutSignal, completion_pair};
use crate::state::{AuthSource, AuthState};

struct Inner {
    state: AuthState,
    pending_logouts: Vec<LogoutSignal>,
}

/// Shared auth store.
///
/// Cheap to clone; clones share state. Changes are published to subscribers
/// after the state is updated, and pending logout completions fire after
/// subscribers have seen the signed-out state.
///
/// Logout requests belong to the session that made them. A new login drops
/// any that are still waiting, so their completions resolve as abandoned
/// rather than firing on a later session's logout.
///
/// The store does not talk to a server. Whoever performs the server-side
/// logout dispatches [`AuthAction::LogoutCompleted`] when it is done.
#[derive(Clone)]
pub struct AuthStore {
    inner: Rc<RefCell<Inner>>,
    changes: InMemoryBus<AuthState>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::with_state(AuthState::default())
    }

    pub fn with_state(state: AuthState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                pending_logouts: Vec::new(),
            })),
            changes: InMemoryBus::new(),
        }
    }

    pub fn state(&self) -> AuthState {
        self.inner.borrow().state.clone()
    }

    pub fn pending_logouts(&self) -> usize {
        self.inner.borrow().pending_logouts.len()
    }

    /// Observe state changes. Not called for actions that leave state unchanged.
    pub fn subscribe(&self, listener: Listener<AuthState>) -> Subscription {
        self.changes.subscribe(listener)
    }

    pub fn dispatch(&self, action: AuthAction) {
        let (changed, next, released, abandoned) = {
            let mut inner = self.inner.borrow_mut();
            let next = reduce(&inner.state, &action);
            let changed = next != inner.state;
            inner.state = next.clone();

            let (released, abandoned) = match &action {
                AuthAction::LogoutCompleted => {
                    (std::mem::take(&mut inner.pending_logouts), Vec::new())
                }
                AuthAction::LoginSucceeded { .. } => {
                    (Vec::new(), std::mem::take(&mut inner.pending_logouts))
                }
                AuthAction::LogoutRequested => (Vec::new(), Vec::new()),
            };
            (changed, next, released, abandoned)
        };

        tracing::debug!(?action, changed, "auth action dispatched");

        if !abandoned.is_empty() {
            tracing::warn!(
                waiters = abandoned.len(),
                "new login; dropping earlier logout requests"
            );
        }
        drop(abandoned);

        if changed {
            self.changes.publish(&next);
        }

        if !released.is_empty() {
            tracing::info!(waiters = released.len(), "logout completed");
        }
        for signal in released {
            signal.complete();
        }
    }

    /// Register a logout request and return its completion.
    pub fn begin_logout(&self) -> LogoutCompletion {
        let (signal, completion) = completion_pair();
        self.inner.borrow_mut().pending_logouts.push(signal);
        tracing::info!("logout requested");
        self.dispatch(AuthAction::LogoutRequested);
        completion
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AuthStore")
            .field("state", &inner.state)
            .field("pending_logouts", &inner.pending_logouts.len())
            .finish()
    }
}

impl AuthSource for AuthStore {
    fn is_authenticated(&self) -> bool {
        self.inner.borrow().state.is_authenticated
    }
}

impl LogoutAction for AuthStore {
    fn logout_user_request(&self) -> LogoutCompletion {
        self.begin_logout()
    }
}
