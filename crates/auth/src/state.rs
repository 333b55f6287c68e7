//! Authentication state as seen by the client.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Snapshot of the client's authentication status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user_name: Option<String>,
    /// A logout has been requested and not yet completed.
    pub logout_pending: bool,
}

impl AuthState {
    pub fn signed_in(user_name: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user_name: Some(user_name.into()),
            logout_pending: false,
        }
    }
}

/// Read access to the authentication flag.
///
/// Components depend on this rather than on a concrete store so they can be
/// rendered against any source of auth state.
pub trait AuthSource {
    fn is_authenticated(&self) -> bool;
}

impl AuthSource for AuthState {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

impl AuthSource for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

impl<T> AuthSource for Rc<T>
where
    T: AuthSource + ?Sized,
{
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}
