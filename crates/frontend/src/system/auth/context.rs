use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use web_sys::window;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Auth context provider component.
///
/// Restores the persisted token synchronously on mount: when it is absent the
/// router gate falls back to the login page before any page (and therefore any
/// data fetch) is mounted.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::get_token() {
        Some(token) => AuthState {
            token: Some(token),
            user: None,
        },
        None => {
            // Keep the address bar honest: an unauthenticated visit lands on /login.
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some("/login"),
                    );
                }
            }
            AuthState::default()
        }
    };

    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
