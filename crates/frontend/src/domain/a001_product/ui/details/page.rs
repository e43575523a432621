use super::form_state::{FIRST_STEP, LAST_STEP};
use super::steps::{
    ApplicationSafetyStep, BasicInfoStep, CompositionBatchStep, DocumentsContactStep,
};
use super::view_model::ProductWizardVm;
use crate::layout::modal_service::use_modal;
use crate::layout::notifications::use_notifications;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::ProductId;
use leptos::prelude::*;
use thaw::*;

const STEP_TITLES: [&str; 4] = [
    "Basic info",
    "Composition & batch",
    "Application & safety",
    "Documents & contact",
];

/// Four-step product wizard shown inside the dashboard modal
#[component]
pub fn ProductWizard(
    /// `Some` edits the stored product
    product_id: Option<ProductId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductWizardVm::new();
    let modal = use_modal();
    let notifications = use_notifications();

    if let Some(id) = product_id {
        vm.load(id);
    }
    on_cleanup(move || vm.release_files());

    let step = vm.step();
    let submitting = vm.is_submitting();
    let locked = vm.is_locked();
    let is_create = vm.is_create();
    let cannot_close = Memo::new(move |_| !vm.state.with(|s| s.can_close()));
    let is_last = move || step.get() >= LAST_STEP;

    let title = move || {
        if is_create.get() {
            "New product".to_string()
        } else {
            vm.state.with(|s| format!("Edit {}", s.name))
        }
    };

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">{title}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=cannot_close
                    on_click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                </Button>
            </div>

            <ol class="wizard__steps">
                {STEP_TITLES
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let number = index as u8 + FIRST_STEP;
                        let class = move || {
                            let current = step.get();
                            if number == current {
                                "wizard__step wizard__step--active"
                            } else if number < current {
                                "wizard__step wizard__step--done"
                            } else {
                                "wizard__step"
                            }
                        };
                        view! {
                            <li class=class>
                                <span class="wizard__step-number">{number}</span>
                                <span class="wizard__step-label">{*label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            {move || vm.error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <div class="wizard__body">
                {move || {
                    if vm.loading.get() {
                        return view! { <Spinner label="Loading product..." /> }.into_any();
                    }
                    match step.get() {
                        1 => view! { <BasicInfoStep vm=vm /> }.into_any(),
                        2 => view! { <CompositionBatchStep vm=vm /> }.into_any(),
                        3 => view! { <ApplicationSafetyStep vm=vm /> }.into_any(),
                        _ => view! { <DocumentsContactStep vm=vm /> }.into_any(),
                    }
                }}
            </div>

            <div class="wizard__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=cannot_close
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <div class="wizard__nav">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || locked.get() || step.get() <= FIRST_STEP)
                        on_click=move |_| vm.prev()
                    >
                        "Back"
                    </Button>
                    {move || {
                        if is_last() {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=locked
                                    on_click=move |_| vm.submit(modal, notifications, on_saved)
                                >
                                    {icon("save")}
                                    {move || if submitting.get() { " Saving..." } else { " Save" }}
                                </Button>
                            }
                                .into_any()
                        } else {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=locked
                                    on_click=move |_| vm.next(notifications)
                                >
                                    "Next"
                                </Button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
