use contracts::shared::validation::{is_valid_email, ValidationError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::system::auth::{api, context::complete_sign_in, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(true);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (api_reachable, set_api_reachable) = signal(true);

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Already signed in: straight to the dashboard
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if auth_state.get().authenticated {
                navigate("/", Default::default());
            }
        }
    });

    spawn_local(async move {
        let reachable = matches!(api::health().await, Ok(status) if status.is_ok());
        if !reachable {
            log::warn!("health probe failed");
        }
        set_api_reachable.set(reachable);
    });

    let submit = move || {
        let email_val = email.get().trim().to_string();
        let password_val = password.get();
        let remember_val = remember.get();

        if !is_valid_email(&email_val) {
            set_error_message.set(Some(ValidationError::InvalidEmail.to_string()));
            return;
        }
        if password_val.is_empty() {
            set_error_message.set(Some("Password is required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::sign_in(email_val.clone(), password_val).await {
                Ok(response) => {
                    complete_sign_in(set_auth_state, response, &email_val, remember_val);
                    set_is_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Fertilizer Inventory"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || !api_reachable.get()>
                    <MessageBar intent=MessageBarIntent::Warning>
                        "API unreachable. Sign-in may fail until the server is back."
                    </MessageBar>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <Input
                            attr:id="email"
                            value=email
                            input_type=InputType::Email
                            placeholder="you@company.com"
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <Input
                            attr:id="password"
                            value=password
                            input_type=InputType::Password
                            disabled=is_loading
                        />
                    </div>

                    <Checkbox checked=remember label="Remember me" />

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
