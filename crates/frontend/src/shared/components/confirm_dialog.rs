use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Destructive-action confirmation rendered inside a modal frame
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="confirm-dialog">
            <div class="confirm-dialog__header">
                {icon("alert")}
                <h3 class="confirm-dialog__title">{title}</h3>
            </div>
            <p class="confirm-dialog__message">{message}</p>
            <div class="confirm-dialog__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=busy
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="button--danger"
                    disabled=busy
                    on_click=move |_| on_confirm.run(())
                >
                    {icon("trash")}
                    {move || if busy.get() { " Deleting..." } else { " Delete" }}
                </Button>
            </div>
        </div>
    }
}
