//! `ghostui-auth`: client-side authentication state and logout flow.
//!
//! This crate is intentionally decoupled from HTTP and the DOM: the browser
//! layer performs the server round trip and reports back through actions.

pub mod action;
pub mod logout;
pub mod state;
pub mod store;

pub use action::{AuthAction, reduce};
pub use logout::{LogoutAction, LogoutCompletion, LogoutError, LogoutSignal, completion_pair};
pub use state::{AuthSource, AuthState};
pub use store::AuthStore;
