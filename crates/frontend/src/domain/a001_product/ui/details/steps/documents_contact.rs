use super::super::view_model::ProductWizardVm;
use super::fields::StateInput;
use crate::layout::notifications::use_notifications;
use crate::shared::components::file_picker::FilePicker;
use contracts::shared::documents::{available_documents, DocumentCategory};
use contracts::shared::validation::UploadKind;
use leptos::prelude::*;

/// Step 4: documents and contact details
#[component]
pub fn DocumentsContactStep(vm: ProductWizardVm) -> impl IntoView {
    let notifications = use_notifications();
    let locked = vm.is_locked();
    let on_error = Callback::new(move |msg: String| notifications.error(msg));

    view! {
        <div class="wizard-step">
            <h3 class="wizard-step__title">"Documents"</h3>
            {DocumentCategory::ALL
                .into_iter()
                .map(|category| {
                    let stored = move || {
                        vm.existing
                            .with(|p| {
                                p.as_ref()
                                    .map(|p| available_documents(p.certifications.get(category)).len())
                            })
                            .unwrap_or(0)
                    };
                    view! {
                        <div class="wizard-step__documents">
                            <FilePicker
                                kind=UploadKind::Document
                                label=format!("{} (PDF, DOC or DOCX, up to 5 MB each)", category.label())
                                files=vm.documents(category)
                                multiple=true
                                disabled=locked
                                on_error=on_error
                            />
                            <Show when=move || { stored() > 0 }>
                                <span class="form__hint">
                                    {move || format!("{} stored; new files are added on save", stored())}
                                </span>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}

            <h3 class="wizard-step__title">"Contact"</h3>
            <StateInput
                vm=vm
                label="Address"
                get=|s| s.address.clone()
                set=|s, v| s.address = v
            />
            <StateInput
                vm=vm
                label="Phones (comma separated)"
                placeholder="+254 700 000000, +254 711 000000"
                get=|s| s.phones.clone()
                set=|s, v| s.phones = v
            />
            <StateInput
                vm=vm
                label="Email"
                placeholder="info@company.com"
                get=|s| s.email.clone()
                set=|s, v| s.email = v
            />
            <StateInput
                vm=vm
                label="Website"
                placeholder="https://company.com"
                get=|s| s.website.clone()
                set=|s, v| s.website = v
            />
        </div>
    }
}
