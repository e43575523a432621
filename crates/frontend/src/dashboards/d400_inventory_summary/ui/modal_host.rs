use crate::domain::a001_product::api as product_api;
use crate::domain::a001_product::ui::details::ProductWizard;
use crate::domain::a002_batch::api as batch_api;
use crate::domain::a002_batch::ui::details::BatchDetails;
use crate::layout::modal_service::{use_modal, DeleteTarget, ModalKind};
use crate::layout::notifications::use_notifications;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Renders the open dashboard modal; `on_changed` runs after any stored change
#[component]
pub fn ModalHost(on_changed: Callback<()>) -> impl IntoView {
    let modal = use_modal();
    let notifications = use_notifications();

    // Memo keeps the open form alive while only the busy flag changes
    let current = Memo::new(move |_| modal.current());

    let on_saved = Callback::new(move |_: ()| {
        modal.finish();
        on_changed.run(());
    });
    let on_cancel = Callback::new(move |_: ()| modal.close());

    let delete = move |target: DeleteTarget| {
        modal.set_busy(true);
        spawn_local(async move {
            let result = match &target {
                DeleteTarget::Product { id, .. } => product_api::delete_product(id).await,
                DeleteTarget::Batch { id, .. } => batch_api::delete_batch(id).await,
            };
            modal.set_busy(false);
            match (result, &target) {
                (Ok(()), DeleteTarget::Product { name, .. }) => {
                    notifications.success(format!("Product {} deleted", name));
                    on_saved.run(());
                }
                (Ok(()), DeleteTarget::Batch { number, .. }) => {
                    notifications.success(format!("Batch {} deleted", number));
                    on_saved.run(());
                }
                (Err(e), _) => notifications.error(format!("Could not delete: {}", e)),
            }
        });
    };

    move || {
        current.get().map(|kind| {
            let (class, body) = match kind {
                ModalKind::ProductWizard { product_id } => (
                    "modal--wide",
                    view! {
                        <ProductWizard product_id=product_id on_saved=on_saved on_cancel=on_cancel />
                    }
                    .into_any(),
                ),
                ModalKind::BatchForm {
                    product_id,
                    product_name,
                    batch_id,
                } => (
                    "modal--narrow",
                    view! {
                        <BatchDetails
                            product_id=product_id
                            product_name=product_name
                            batch_id=batch_id
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    }
                    .into_any(),
                ),
                ModalKind::ConfirmDelete(target) => {
                    let prompt = target.prompt();
                    let title = match &target {
                        DeleteTarget::Product { .. } => "Delete product",
                        DeleteTarget::Batch { .. } => "Delete batch",
                    };
                    let on_confirm = Callback::new(move |_: ()| delete(target.clone()));
                    (
                        "modal--narrow",
                        view! {
                            <ConfirmDialog
                                title=title
                                message=prompt
                                busy=Signal::derive(move || modal.is_busy())
                                on_confirm=on_confirm
                                on_cancel=on_cancel
                            />
                        }
                        .into_any(),
                    )
                }
            };
            view! {
                <ModalFrame on_close=on_cancel modal_class=class>
                    {body}
                </ModalFrame>
            }
        })
    }
}
