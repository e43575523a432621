//! Top navigation bar: brand, signed-in user, sign-out.

use crate::layout::notifications::use_notifications;
use crate::shared::http::SIGN_IN_PATH;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_sign_out, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();
    let notifications = use_notifications();
    let (signing_out, set_signing_out) = signal(false);

    let sign_out = move |_| {
        set_signing_out.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            do_sign_out(set_auth_state).await;
            set_signing_out.set(false);
            notifications.info("Signed out");
            navigate(SIGN_IN_PATH, Default::default());
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("package")}
                <span class="top-header__title">"Fertilizer Inventory"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || auth_state.get().display_name().unwrap_or_else(|| "Guest".to_string())}
                    </span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=sign_out
                    disabled=move || signing_out.get()
                    title="Sign out"
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
