use super::documents::DocumentGroup;
use crate::shared::download::DownloadRegistry;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use contracts::projections::p900_product_view::{ExpiryGate, ProductView, ViewTab};
use leptos::prelude::*;

fn bullet_list(title: &'static str, items: &[String]) -> AnyView {
    let items: Vec<String> = items
        .iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect();
    view! {
        <section class="product-view__section">
            <h3 class="product-view__section-title">{title}</h3>
            {if items.is_empty() {
                view! { <p class="product-view__empty">"Not specified"</p> }.into_any()
            } else {
                view! {
                    <ul class="product-view__list">
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
    .into_any()
}

fn do_not_use_warning() -> AnyView {
    view! {
        <div class="product-view__warning">
            {icon("alert")}
            <div>
                <strong>"Do not use this batch."</strong>
                <p>
                    "This batch has expired. Do not apply it to crops. Dispose of it according to local regulations and the safety data sheet."
                </p>
            </div>
        </div>
    }
    .into_any()
}

fn composition(product: &Product) -> AnyView {
    let ingredients = product.composition.ingredients.clone();
    view! {
        <section class="product-view__section">
            <h3 class="product-view__section-title">"Ingredients"</h3>
            {if ingredients.is_empty() {
                view! { <p class="product-view__empty">"Not specified"</p> }.into_any()
            } else {
                view! {
                    <table class="table product-view__ingredients">
                        <tbody>
                            {ingredients
                                .into_iter()
                                .map(|i| view! {
                                    <tr>
                                        <td>{i.name}</td>
                                        <td class="product-view__percentage">{i.percentage}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </section>
    }
    .into_any()
}

/// Content of one tab, with expiry gating and the tab's documents
#[component]
pub fn TabContent(
    tab: ViewTab,
    view_data: ProductView,
    gate: ExpiryGate,
    registry: RwSignal<DownloadRegistry>,
) -> impl IntoView {
    let product = &view_data.product;
    let body = if !gate.shows_instructions(tab) {
        do_not_use_warning()
    } else {
        match tab {
            ViewTab::Composition => composition(product),
            ViewTab::Application => bullet_list("How to apply", &product.application.instructions),
            ViewTab::Benefits => view! {
                <div>
                    {bullet_list("Advantages", &product.composition.advantages)}
                    {bullet_list("Recommended crops", &product.application.recommended_crops)}
                </div>
            }
            .into_any(),
            ViewTab::Safety => view! {
                <div>
                    {bullet_list("Protective equipment", &product.safety.ppe_instructions)}
                    {bullet_list("Hygiene", &product.safety.hygiene_instructions)}
                </div>
            }
            .into_any(),
        }
    };

    let documents = view_data
        .documents_for(tab)
        .map(|(category, raw)| {
            view! { <DocumentGroup category=category raw=raw.to_string() registry=registry /> }
        });

    view! {
        <div class="product-view__tab">
            {body}
            {documents}
        </div>
    }
}
