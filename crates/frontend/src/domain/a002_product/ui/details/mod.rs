use contracts::domain::a002_product::Product;
use contracts::domain::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::{detail_fields, status_badge, stock_tone};
use crate::shared::api::{fetch_one, HttpApi};
use crate::shared::icons::icon;
use crate::shared::list::{Cell, ListEntity, NOT_AVAILABLE};

#[derive(Debug, Clone, PartialEq)]
enum DetailsState {
    Loading,
    Loaded(Box<Product>),
    Failed(String),
}

/// Read-only page for one product, reached from the list's View action
#[component]
pub fn ProductDetails(id: EntityId) -> impl IntoView {
    let api = use_context::<HttpApi>().expect("HttpApi not found in component tree");
    let state = RwSignal::new(DetailsState::Loading);

    spawn_local(async move {
        match fetch_one::<Product, _>(&api, Product::item_path(id)).await {
            Ok(product) => state.set(DetailsState::Loaded(Box::new(product))),
            Err(e) => {
                log::error!("Error loading product {}: {}", id, e);
                state.set(DetailsState::Failed(e.to_string()));
            }
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <a class="btn btn-sm btn-secondary" href="/products">
                        {icon("chevron-left")}
                        " Back to Products"
                    </a>
                </div>
            </div>
            <div class="page__content">
                {move || match state.get() {
                    DetailsState::Loading => view! { <Spinner /> }.into_any(),
                    DetailsState::Failed(message) => view! {
                        <div class="alert alert-danger">
                            {format!("Error loading product: {}", message)}
                        </div>
                    }
                    .into_any(),
                    DetailsState::Loaded(product) => product_view(*product),
                }}
            </div>
        </div>
    }
}

fn product_view(product: Product) -> AnyView {
    let status = status_badge(product.is_active);
    let stock = Cell::badge(product.quantity_in_stock.to_string(), stock_tone(&product));
    let description = product
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let fields = detail_fields(&product);

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="page__title">{product.product_name}</h2>
                {badge(status)}
                {badge(stock)}
            </div>
            <div class="card-body">
                <p class="text-muted">{description}</p>
                <dl class="details-grid">
                    {fields
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()}
                </dl>
            </div>
        </div>
    }
    .into_any()
}

fn badge(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Badge { text, tone } => view! { <span class=tone.class()>{text}</span> }.into_any(),
        other => view! { <span>{other.as_text().to_string()}</span> }.into_any(),
    }
}
