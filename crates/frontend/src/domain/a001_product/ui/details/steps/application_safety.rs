use super::super::form_state::ListField;
use super::super::view_model::ProductWizardVm;
use super::fields::ListFieldEditor;
use leptos::prelude::*;

/// Step 3
#[component]
pub fn ApplicationSafetyStep(vm: ProductWizardVm) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <h3 class="wizard-step__title">"Application"</h3>
            <ListFieldEditor vm=vm field=ListField::ApplicationSteps />
            <ListFieldEditor vm=vm field=ListField::RecommendedCrops />

            <h3 class="wizard-step__title">"Safety"</h3>
            <ListFieldEditor vm=vm field=ListField::PpeInstructions />
            <ListFieldEditor vm=vm field=ListField::HygieneInstructions />
        </div>
    }
}
