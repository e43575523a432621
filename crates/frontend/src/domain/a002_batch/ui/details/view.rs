use super::view_model::BatchDetailsVm;
use crate::layout::modal_service::use_modal;
use crate::layout::notifications::use_notifications;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a002_batch::aggregate::BatchId;
use leptos::prelude::*;
use thaw::*;

/// Add-stock / update-batch form
#[component]
pub fn BatchDetails(
    product_id: ProductId,
    #[prop(into)] product_name: String,
    batch_id: Option<BatchId>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BatchDetailsVm::new(product_id, batch_id);
    vm.load();

    let modal = use_modal();
    let notifications = use_notifications();
    let busy = vm.is_busy();

    let title = if vm.is_edit_mode() {
        format!("Update batch of {}", product_name)
    } else {
        format!("Add stock: {}", product_name)
    };

    view! {
        <div class="details-container batch-details">
            <div class="modal-header">
                <h3 class="modal-title">{title}</h3>
            </div>

            <div class="modal-body">
                {move || vm.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}

                <Show when=move || vm.loading.get()>
                    <Spinner label="Loading batch..." />
                </Show>

                <div class="details-grid--3col">
                    <div class="form__group">
                        <label class="form__label" for="batch-number">"Batch number *"</label>
                        <Input attr:id="batch-number" value=vm.number placeholder="UG-2024-001" disabled=busy />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="batch-mfg">"Manufacturing date *"</label>
                        <DateInput id="batch-mfg" value=vm.manufacturing_date disabled=busy />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="batch-exp">"Expiry date *"</label>
                        <DateInput
                            id="batch-exp"
                            value=vm.expiry_date
                            min=Signal::derive(move || vm.manufacturing_date.get())
                            disabled=busy
                        />
                    </div>
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=busy
                    on_click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                    " Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    on_click=move |_| vm.save(modal, notifications, on_saved)
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else if vm.is_edit_mode() { " Save batch" } else { " Add batch" }}
                </Button>
            </div>
        </div>
    }
}
