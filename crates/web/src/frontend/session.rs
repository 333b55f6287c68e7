//! Session persistence in `localStorage`.

use ghostui_auth::AuthState;
use gloo_storage::{LocalStorage, Storage};

const ACCESS_TOKEN_KEY: &str = "access_token";
const USER_NAME_KEY: &str = "user_name";

/// Auth state recovered from a previous page load.
pub fn restore() -> AuthState {
    match (access_token(), LocalStorage::get::<String>(USER_NAME_KEY)) {
        (Some(_), Ok(user_name)) => AuthState::signed_in(user_name),
        _ => AuthState::default(),
    }
}

pub fn save(access_token: &str, user_name: &str) {
    if let Err(err) = LocalStorage::set(ACCESS_TOKEN_KEY, access_token) {
        tracing::warn!(%err, "failed to persist access token");
    }
    if let Err(err) = LocalStorage::set(USER_NAME_KEY, user_name) {
        tracing::warn!(%err, "failed to persist user name");
    }
}

pub fn access_token() -> Option<String> {
    LocalStorage::get(ACCESS_TOKEN_KEY).ok()
}

pub fn clear() {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
    LocalStorage::delete(USER_NAME_KEY);
}
