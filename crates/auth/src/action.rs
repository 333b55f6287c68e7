//! Auth actions and the reducer that applies them.

use serde::{Deserialize, Serialize};

use crate::state::AuthState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthAction {
    LoginSucceeded { user_name: String },
    LogoutRequested,
    LogoutCompleted,
}

/// Apply `action` to `state`.
///
/// - No IO
/// - No panics
/// - Deterministic
pub fn reduce(state: &AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::LoginSucceeded { user_name } => AuthState::signed_in(user_name.clone()),
        AuthAction::LogoutRequested => AuthState {
            logout_pending: true,
            ..state.clone()
        },
        AuthAction::LogoutCompleted => AuthState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_sets_flag_and_user() {
        let next = reduce(
            &AuthState::default(),
            &AuthAction::LoginSucceeded {
                user_name: "admin".to_string(),
            },
        );
        assert!(next.is_authenticated);
        assert_eq!(next.user_name.as_deref(), Some("admin"));
    }

    #[test]
    fn logout_request_keeps_session_until_completed() {
        let signed_in = AuthState::signed_in("admin");
        let requested = reduce(&signed_in, &AuthAction::LogoutRequested);
        assert!(requested.is_authenticated);
        assert!(requested.logout_pending);

        let completed = reduce(&requested, &AuthAction::LogoutCompleted);
        assert_eq!(completed, AuthState::default());
    }

    #[test]
    fn actions_serialize_tagged() {
        let json = serde_json::to_string(&AuthAction::LogoutRequested).unwrap();
        assert_eq!(json, r#"{"type":"logout_requested"}"#);
    }
}
