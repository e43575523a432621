use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` string
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Lower bound in `YYYY-MM-DD`, e.g. the manufacturing date for the expiry picker
    #[prop(optional, into)]
    min: Signal<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input form__input--date"
            id=id
            prop:value=move || value.get()
            min=move || min.get()
            disabled=move || disabled.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
