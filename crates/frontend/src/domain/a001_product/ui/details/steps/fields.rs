//! Inputs bound to fields of the wizard state

use super::super::form_state::{ListField, ProductFormState};
use super::super::view_model::ProductWizardVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Single text field; `get`/`set` pick the field out of the state
#[component]
pub fn StateInput(
    vm: ProductWizardVm,
    #[prop(into)] label: String,
    get: fn(&ProductFormState) -> String,
    set: fn(&mut ProductFormState, String),
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let locked = vm.is_locked();
    let value = move || vm.state.with(get);
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        vm.state.update(|s| set(s, text));
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then_some(view! { <span class="form__required">" *"</span> })}
            </label>
            {if multiline {
                view! {
                    <textarea
                        class="form__textarea"
                        rows="4"
                        placeholder=placeholder
                        prop:value=value
                        disabled=move || locked.get()
                        on:input=on_input
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        class="form__input"
                        type="text"
                        placeholder=placeholder
                        prop:value=value
                        disabled=move || locked.get()
                        on:input=on_input
                    />
                }
                    .into_any()
            }}
        </div>
    }
}

/// Growable list of single-line entries; the last entry cannot be removed
#[component]
pub fn ListFieldEditor(vm: ProductWizardVm, field: ListField) -> impl IntoView {
    let locked = vm.is_locked();
    let count = Memo::new(move |_| vm.state.with(|s| s.list(field).len()));

    view! {
        <div class="form__group">
            <label class="form__label">{field.label()}</label>
            <div class="list-field">
                {move || {
                    (0..count.get())
                        .map(|index| {
                            let value = move || {
                                vm.state
                                    .with(|s| s.list(field).entries().get(index).cloned())
                                    .unwrap_or_default()
                            };
                            view! {
                                <div class="list-field__row">
                                    <input
                                        class="form__input"
                                        type="text"
                                        placeholder=field.placeholder()
                                        prop:value=value
                                        disabled=move || locked.get()
                                        on:input=move |ev| {
                                            vm.set_entry(field, index, event_target_value(&ev))
                                        }
                                    />
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        disabled=Signal::derive(move || locked.get() || count.get() <= 1)
                                        on_click=move |_| vm.remove_entry(field, index)
                                    >
                                        {icon("trash")}
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=locked
                    on_click=move |_| vm.add_entry(field)
                >
                    {icon("plus")}
                    " Add"
                </Button>
            </div>
        </div>
    }
}
