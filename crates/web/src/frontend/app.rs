//! Leptos application with routing.

use std::rc::Rc;

use ghostui_auth::AuthAction;
use ghostui_core::AppConfig;
use leptos::*;
use leptos_router::*;

use crate::frontend::api::{self, LoginRequest};
use crate::frontend::context::{provide_auth_context, use_auth_context};
use crate::frontend::session;
use crate::frontend::settings::Settings;

const HOME_PATH: &str = "/home";

fn load_config() -> AppConfig {
    AppConfig::from_json(include_str!("../../config/app.json")).unwrap_or_else(|err| {
        tracing::error!(%err, "bundled config rejected; using defaults");
        AppConfig::default()
    })
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let config = Rc::new(load_config());
    let login_path = config.routes.login.path.clone();
    provide_auth_context(config);

    view! {
        <Router>
            <Settings />
            <main>
                <Routes>
                    <Route path=login_path view=LoginPage/>
                    <Route path=HOME_PATH view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let is_submitting = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        is_submitting.set(true);
        error.set(None);
        let request = LoginRequest {
            username: username.get(),
            password: password.get(),
        };
        let url = auth.config.api_url("/auth/login");
        let store = auth.store.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(&url, &request).await {
                Ok(response) => {
                    session::save(&response.access_token, &response.user_name);
                    store.dispatch(AuthAction::LoginSucceeded {
                        user_name: response.user_name,
                    });
                    navigate(HOME_PATH, Default::default());
                }
                Err(err) => {
                    tracing::warn!(%err, "login failed");
                    error.set(Some(err.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="login">
            <h1>"Sign in"</h1>
            <form on:submit=submit>
                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
                <button type="submit" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let auth = use_auth_context();
    let login_path = auth.config.routes.login.path.clone();
    let is_authenticated = auth.is_authenticated;
    let store = auth.store.clone();

    let user_name = move || {
        // Re-read the store whenever the flag changes.
        is_authenticated.get();
        store.state().user_name.unwrap_or_default()
    };

    view! {
        <Show
            when=move || is_authenticated.get()
            fallback=move || view! { <A href=login_path.clone()>"Sign in to continue"</A> }
        >
            <h1>"Home"</h1>
            <p>"Signed in as " {user_name.clone()}</p>
        </Show>
    }
}
