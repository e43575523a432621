use super::modal_host::ModalHost;
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::list::{create_state, persist_state, ProductTable};
use crate::layout::modal_service::{use_modal, ModalKind};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::now;
use crate::shared::icons::icon;
use contracts::dashboards::d400_inventory_summary::InventorySummary;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Inventory dashboard: totals, product table, and the modal flows
#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let modal = use_modal();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loaded, set_loaded) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let list_state = create_state();
    let search = RwSignal::new(list_state.with_untracked(|st| st.q.clone()));

    Effect::new(move |_| {
        let q = search.get();
        list_state.update(|st| st.q = q);
        persist_state(list_state);
    });

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    set_products.set(list);
                    set_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(format!("Could not load products: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let summary = Memo::new(move |_| {
        loaded
            .get()
            .then(|| products.with(|list| InventorySummary::from_products(list, now())))
    });
    let stat = move |pick: fn(&InventorySummary) -> usize| {
        Signal::derive(move || summary.get().as_ref().map(pick))
    };

    view! {
        <div class="page inventory-dashboard">
            <PageHeader
                title="Inventory"
                subtitle="Fertilizer products and their batches".to_string()
                icon_name="inventory"
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=loading
                    on_click=move |_| load()
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.open(ModalKind::ProductWizard { product_id: None })
                >
                    {icon("plus")}
                    " Add product"
                </Button>
            </PageHeader>

            <div class="stat-cards">
                <StatCard label="Products" icon_name="products" value=stat(|s| s.total_products) />
                <StatCard label="Batches" icon_name="inventory" value=stat(|s| s.total_batches) />
                <StatCard
                    label="Active"
                    icon_name="package"
                    tone=StatTone::Success
                    value=stat(|s| s.active)
                />
                <StatCard
                    label="Expiring soon"
                    icon_name="clock"
                    tone=StatTone::Warning
                    value=stat(|s| s.expiring_soon)
                />
                <StatCard
                    label="Expired"
                    icon_name="alert"
                    tone=StatTone::Error
                    value=stat(|s| s.expired)
                />
            </div>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <div class="inventory-dashboard__toolbar">
                {icon("search")}
                <Input value=search placeholder="Search by name or product ID" />
            </div>

            {move || {
                if loading.get() && !loaded.get() {
                    view! { <Spinner label="Loading products..." /> }.into_any()
                } else {
                    view! { <ProductTable products=products state=list_state /> }.into_any()
                }
            }}

            <ModalHost on_changed=Callback::new(move |_| load()) />
        </div>
    }
}
