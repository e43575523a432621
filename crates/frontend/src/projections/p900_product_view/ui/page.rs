use super::tabs::TabContent;
use crate::projections::p900_product_view::api;
use crate::shared::components::ui::BatchStatusBadge;
use crate::shared::config::app_config;
use crate::shared::date_utils::{format_date, now};
use crate::shared::download::DownloadRegistry;
use crate::shared::icons::icon;
use contracts::projections::p900_product_view::{ExpiryGate, ProductView, ViewTab};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Public page behind the batch link and QR code
#[component]
pub fn ProductViewPage() -> impl IntoView {
    let params = use_params_map();
    let batch_id = move || params.with(|p| p.get("batch_id").unwrap_or_default());

    let (data, set_data) = signal(None::<ProductView>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let selected_tab = RwSignal::new(ViewTab::Composition.key().to_string());

    let registry = RwSignal::new(DownloadRegistry::new());
    on_cleanup(move || {
        if let Some(stopped) = registry.try_update(|r| r.cancel_all()) {
            if stopped > 0 {
                log::info!("aborted {} downloads on leave", stopped);
            }
        }
    });

    Effect::new(move |_| {
        let id = batch_id();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_product_view(&id).await {
                Ok(view) => set_data.set(Some(view)),
                Err(e) => {
                    log::error!("Failed to load batch {}: {}", id, e);
                    set_error.set(Some(format!("This batch could not be loaded: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="product-view">
            {move || {
                if loading.get() {
                    return view! { <Spinner label="Loading product..." /> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
                    }
                        .into_any();
                }
                match data.get() {
                    Some(view_data) => view! {
                        <ProductViewBody view_data=view_data selected_tab=selected_tab registry=registry />
                    }
                        .into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ProductViewBody(
    view_data: ProductView,
    selected_tab: RwSignal<String>,
    registry: RwSignal<DownloadRegistry>,
) -> impl IntoView {
    let today = now();
    let status = view_data.status(today);
    let gate = ExpiryGate::from_status(status);
    let product = view_data.product.clone();
    let batch = view_data.batch.clone();
    let image = app_config().image_url(&product.image);

    let current_tab = move || {
        selected_tab.with(|key| ViewTab::from_key(key)).unwrap_or(ViewTab::Composition)
    };

    view! {
        <header class="product-view__header">
            {image.map(|src| view! { <img class="product-view__image" src=src alt=product.name.clone() /> })}
            <div class="product-view__heading">
                <h1 class="product-view__name">{product.name.clone()}</h1>
                <p class="product-view__short">{product.short_description.clone()}</p>
                <dl class="product-view__facts">
                    <dt>"Batch"</dt>
                    <dd>{batch.number.clone()}</dd>
                    <dt>"Manufactured"</dt>
                    <dd>{format_date(&batch.manufacturing_date)}</dd>
                    <dt>"Expires"</dt>
                    <dd>{format_date(&batch.expiry_date)}</dd>
                    <dt>"Status"</dt>
                    <dd><BatchStatusBadge status=status /></dd>
                </dl>
            </div>
        </header>

        {(gate == ExpiryGate::DoNotUse).then(|| view! {
            <MessageBar intent=MessageBarIntent::Error>
                "This batch has expired. Application and safety instructions are withheld."
            </MessageBar>
        })}
        {gate.notice().map(|text| view! {
            <MessageBar intent=MessageBarIntent::Warning>{icon("clock")}" "{text}</MessageBar>
        })}

        {(!product.full_description.trim().is_empty()).then(|| view! {
            <p class="product-view__description">{product.full_description.clone()}</p>
        })}

        <TabList selected_value=selected_tab>
            {ViewTab::ALL
                .into_iter()
                .map(|tab| view! { <Tab value=tab.key()>{tab.label()}</Tab> })
                .collect_view()}
        </TabList>

        {move || view! {
            <TabContent tab=current_tab() view_data=view_data.clone() gate=gate registry=registry />
        }}

        {(!product.contact.email.is_empty() || !product.contact.phones.is_empty()).then(|| {
            let contact = product.contact.clone();
            view! {
                <footer class="product-view__contact">
                    <h3>"Manufacturer contact"</h3>
                    {(!contact.address.is_empty()).then(|| view! { <p>{contact.address.clone()}</p> })}
                    {contact.phones.iter().map(|p| view! { <p>{p.clone()}</p> }).collect_view()}
                    {(!contact.email.is_empty()).then(|| {
                        let href = format!("mailto:{}", contact.email);
                        view! { <p><a href=href>{contact.email.clone()}</a></p> }
                    })}
                    {(!contact.website.is_empty()).then(|| view! {
                        <p>
                            <a href=contact.website.clone() target="_blank" rel="noopener noreferrer">
                                {contact.website.clone()}
                            </a>
                        </p>
                    })}
                </footer>
            }
        })}
    }
}
