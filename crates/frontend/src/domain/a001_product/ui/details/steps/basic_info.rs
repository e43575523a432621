use super::super::view_model::ProductWizardVm;
use super::fields::StateInput;
use crate::layout::notifications::use_notifications;
use crate::shared::components::file_picker::FilePicker;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use contracts::shared::validation::UploadKind;
use leptos::prelude::*;
use thaw::*;

/// Step 1: name, product ID, descriptions, image
#[component]
pub fn BasicInfoStep(vm: ProductWizardVm) -> impl IntoView {
    let notifications = use_notifications();
    let locked = vm.is_locked();
    let is_create = vm.is_create();

    let name = move || vm.state.with(|s| s.name.clone());
    let product_id = move || vm.state.with(|s| s.product_id.clone());
    let current_image = move || {
        vm.existing
            .with(|p| p.as_ref().map(|p| p.image.clone()))
            .filter(|image| !image.is_empty())
            .and_then(|image| app_config().image_url(&image))
    };

    view! {
        <div class="wizard-step">
            <div class="form__group">
                <label class="form__label">"Product name" <span class="form__required">" *"</span></label>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Urea Gold"
                    prop:value=name
                    disabled=move || locked.get()
                    on:input=move |ev| vm.set_name(event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label class="form__label">"Product ID" <span class="form__required">" *"</span></label>
                <div class="form__row">
                    <input
                        class="form__input"
                        type="text"
                        prop:value=product_id
                        disabled=move || locked.get() || !is_create.get()
                        on:input=move |ev| vm.set_product_id(event_target_value(&ev))
                    />
                    <Show when=move || is_create.get()>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=locked
                            on_click=move |_| vm.reset_product_id()
                        >
                            {icon("refresh")}
                            " From name"
                        </Button>
                    </Show>
                </div>
                <Show when=move || !is_create.get()>
                    <span class="form__hint">"The product ID cannot be changed"</span>
                </Show>
            </div>

            <StateInput
                vm=vm
                label="Short description"
                get=|s| s.short_description.clone()
                set=|s, v| s.short_description = v
            />
            <StateInput
                vm=vm
                label="Full description"
                multiline=true
                get=|s| s.full_description.clone()
                set=|s, v| s.full_description = v
            />

            {move || current_image().map(|src| view! {
                <div class="form__group">
                    <label class="form__label">"Current image"</label>
                    <img class="wizard-step__image" src=src alt="Product image" />
                </div>
            })}

            <FilePicker
                kind=UploadKind::Image
                label="Product image (PNG or JPEG, up to 5 MB)"
                files=vm.image
                disabled=locked
                on_error=Callback::new(move |msg: String| notifications.error(msg))
            />
        </div>
    }
}
