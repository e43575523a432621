use contracts::system::auth::{SignInResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Session check finished
    pub checked: bool,
    pub authenticated: bool,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.display_name().to_string())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from the cookie or a stored token
    spawn_local(async move {
        match api::check().await {
            Ok(check) => {
                if !check.authenticated {
                    storage::clear_tokens();
                }
                set_auth_state.set(AuthState {
                    checked: true,
                    authenticated: check.authenticated,
                    user: check.user,
                });
            }
            Err(e) => {
                log::warn!("session check failed: {}", e);
                set_auth_state.set(AuthState {
                    checked: true,
                    ..AuthState::default()
                });
            }
        }
    });

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

/// Store what sign-in returned and mark the session as authenticated
pub fn complete_sign_in(
    set_auth_state: WriteSignal<AuthState>,
    response: SignInResponse,
    email: &str,
    remember: bool,
) {
    if let Some(token) = response.token.as_deref().filter(|t| !t.is_empty()) {
        storage::save_token(token, remember);
    }
    let user = response.user.or_else(|| {
        Some(UserInfo {
            id: String::new(),
            email: email.to_string(),
            name: None,
        })
    });
    set_auth_state.set(AuthState {
        checked: true,
        authenticated: true,
        user,
    });
}

/// Sign out on the server and always forget the local session
pub async fn do_sign_out(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::sign_out().await {
        log::warn!("sign-out request failed: {}", e);
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState {
        checked: true,
        ..AuthState::default()
    });
}
