use super::super::form_state::ListField;
use super::super::view_model::ProductWizardVm;
use super::fields::{ListFieldEditor, StateInput};
use leptos::prelude::*;

/// Step 2: composition; the first batch only when creating
#[component]
pub fn CompositionBatchStep(vm: ProductWizardVm) -> impl IntoView {
    let is_create = vm.is_create();
    let locked = vm.is_locked();
    let mfg_date = move || vm.state.with(|s| s.manufacturing_date.clone());
    let expiry_date = move || vm.state.with(|s| s.expiry_date.clone());

    view! {
        <div class="wizard-step">
            <h3 class="wizard-step__title">"Composition"</h3>
            <span class="form__hint">"One ingredient per line as Name:Percentage"</span>
            <ListFieldEditor vm=vm field=ListField::Ingredients />
            <ListFieldEditor vm=vm field=ListField::Advantages />

            <Show when=move || is_create.get()>
                <h3 class="wizard-step__title">"First batch"</h3>
                <StateInput
                    vm=vm
                    label="Batch number"
                    placeholder="UG-2026-001"
                    required=true
                    get=|s| s.batch_number.clone()
                    set=|s, v| s.batch_number = v
                />
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Manufacturing date"</label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=mfg_date
                            disabled=move || locked.get()
                            on:input=move |ev| {
                                vm.state.update(|s| s.manufacturing_date = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Expiry date"</label>
                        <input
                            class="form__input"
                            type="date"
                            min=mfg_date
                            prop:value=expiry_date
                            disabled=move || locked.get()
                            on:input=move |ev| {
                                vm.state.update(|s| s.expiry_date = event_target_value(&ev))
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
