//! Product table of the inventory dashboard with expandable batch rows.

mod state;

pub use state::{create_state, persist_state, ProductListState};

use crate::layout::modal_service::{use_modal, DeleteTarget, ModalKind};
use crate::layout::notifications::use_notifications;
use crate::shared::clipboard::copy_text;
use crate::shared::components::ui::BatchStatusBadge;
use crate::shared::config::app_config;
use crate::shared::date_utils::{format_date, now};
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_batch::aggregate::Batch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    state: RwSignal<ProductListState>,
) -> impl IntoView {
    let visible = move || state.with(|st| products.with(|list| st.filter(list)));

    view! {
        <div class="table-wrapper">
            <table class="table products-table">
                <thead>
                    <tr>
                        <th class="products-table__toggle"></th>
                        <th>"Product"</th>
                        <th>"Product ID"</th>
                        <th>"Batches"</th>
                        <th class="products-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = visible();
                        if rows.is_empty() {
                            let text = if state.with(|st| st.q.trim().is_empty()) {
                                "No products yet. Add the first one."
                            } else {
                                "No products match the search."
                            };
                            return view! {
                                <tr>
                                    <td colspan="5" class="table__empty">{text}</td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|product| view! { <ProductRow product=product state=state /> })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductRow(product: Product, state: RwSignal<ProductListState>) -> impl IntoView {
    let modal = use_modal();
    let key = product.product_id.value().to_string();
    let expanded = {
        let key = key.clone();
        move || state.with(|st| st.is_expanded(&key))
    };
    let thumbnail = app_config().image_url(&product.image);
    let batch_count = product.batches.len();

    let open_stock = {
        let product = product.clone();
        move |_| {
            modal.open(ModalKind::BatchForm {
                product_id: product.product_id.clone(),
                product_name: product.name.clone(),
                batch_id: None,
            })
        }
    };
    let open_edit = {
        let id = product.product_id.clone();
        move |_| {
            modal.open(ModalKind::ProductWizard {
                product_id: Some(id.clone()),
            })
        }
    };
    let open_delete = {
        let target = DeleteTarget::Product {
            id: product.product_id.clone(),
            name: product.name.clone(),
        };
        move |_| modal.open(ModalKind::ConfirmDelete(target.clone()))
    };

    let batches = product.batches.clone();
    let product_for_batches = product.clone();
    let expanded_icon = expanded.clone();

    view! {
        <tr class="products-table__row">
            <td class="products-table__toggle">
                <Button
                    appearance=ButtonAppearance::Transparent
                    size=ButtonSize::Small
                    on_click=move |_| state.update(|st| st.toggle(&key))
                >
                    {
                        let expanded = expanded_icon.clone();
                        move || if expanded() { icon("chevron-down") } else { icon("chevron-right") }
                    }
                </Button>
            </td>
            <td>
                <div class="products-table__product">
                    {match thumbnail {
                        Some(src) => view! { <img class="products-table__thumb" src=src alt="" /> }.into_any(),
                        None => view! { <span class="products-table__thumb">{icon("package")}</span> }.into_any(),
                    }}
                    <span class="products-table__name">{product.name.clone()}</span>
                </div>
            </td>
            <td class="products-table__id">{product.product_id.value().to_string()}</td>
            <td>{batch_count}</td>
            <td class="products-table__actions">
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=open_stock>
                    {icon("plus")}
                    " Add stock"
                </Button>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=open_edit>
                    {icon("edit")}
                </Button>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=open_delete>
                    {icon("trash")}
                </Button>
            </td>
        </tr>
        <Show when=expanded>
            <tr class="products-table__batches">
                <td></td>
                <td colspan="4">
                    <BatchRows product=product_for_batches.clone() batches=batches.clone() />
                </td>
            </tr>
        </Show>
    }
}

#[component]
fn BatchRows(product: Product, batches: Vec<Batch>) -> impl IntoView {
    if batches.is_empty() {
        return view! {
            <div class="batches__empty">"No batches yet. Use Add stock to record one."</div>
        }
        .into_any();
    }
    let today = now();

    view! {
        <table class="table table--nested batches">
            <thead>
                <tr>
                    <th>"Batch"</th>
                    <th>"Manufactured"</th>
                    <th>"Expires"</th>
                    <th>"Status"</th>
                    <th>"Public link"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {batches
                    .into_iter()
                    .map(|batch| {
                        let status = batch.status(today);
                        view! { <BatchRow product=product.clone() batch=batch status=status /> }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn BatchRow(
    product: Product,
    batch: Batch,
    status: contracts::domain::a002_batch::status::BatchStatus,
) -> impl IntoView {
    let modal = use_modal();
    let notifications = use_notifications();
    let link = app_config().public_batch_url(batch.batch_id.value());

    let copy_link = {
        let link = link.clone();
        move |_| {
            let link = link.clone();
            spawn_local(async move {
                match copy_text(&link).await {
                    Ok(()) => notifications.success("Public link copied"),
                    Err(e) => notifications.error(e),
                }
            });
        }
    };
    let open_edit = {
        let kind = ModalKind::BatchForm {
            product_id: product.product_id.clone(),
            product_name: product.name.clone(),
            batch_id: Some(batch.batch_id.clone()),
        };
        move |_| modal.open(kind.clone())
    };
    let open_delete = {
        let target = DeleteTarget::Batch {
            id: batch.batch_id.clone(),
            number: batch.number.clone(),
        };
        move |_| modal.open(ModalKind::ConfirmDelete(target.clone()))
    };

    view! {
        <tr class="batches__row">
            <td class="batches__number">{batch.number.clone()}</td>
            <td>{format_date(&batch.manufacturing_date)}</td>
            <td>{format_date(&batch.expiry_date)}</td>
            <td><BatchStatusBadge status=status /></td>
            <td class="batches__link">
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=copy_link>
                    {icon("copy")}
                </Button>
                <a class="batches__open" href=link target="_blank" rel="noopener noreferrer">
                    {icon("external")}
                </a>
            </td>
            <td class="batches__actions">
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=open_edit>
                    {icon("edit")}
                </Button>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=open_delete>
                    {icon("trash")}
                </Button>
            </td>
        </tr>
    }
}
