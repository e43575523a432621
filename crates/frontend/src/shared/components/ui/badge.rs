use contracts::domain::a002_batch::status::BatchStatus;
use leptos::prelude::*;

/// Expiry status of a batch: Expired, Expires in N days, Active
#[component]
pub fn BatchStatusBadge(#[prop(into)] status: Signal<BatchStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--status badge--{}", status.get().badge_variant())>
            {move || status.get().label()}
        </span>
    }
}
