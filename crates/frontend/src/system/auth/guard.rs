use leptos::prelude::*;
use leptos_router::components::Redirect;
use thaw::*;

use super::context::use_auth;
use crate::shared::http::SIGN_IN_PATH;

/// Renders children for signed-in users; everyone else goes to the sign-in page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        {move || {
            let state = auth_state.get();
            if !state.checked {
                view! {
                    <div class="page page--centered">
                        <Spinner label="Checking session..." />
                    </div>
                }
                    .into_any()
            } else if state.authenticated {
                children().into_any()
            } else {
                view! { <Redirect path=SIGN_IN_PATH /> }.into_any()
            }
        }}
    }
}
