use contracts::domain::a002_product::Product;
use contracts::domain::a004_sale::{Sale, SaleFilter};
use contracts::domain::EntityId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_sale::summary::{fetch_summary, SummaryTracker};
use crate::domain::a004_sale::{select_product, PRODUCT_LOOKUP_SIZE};
use crate::shared::api::HttpApi;
use crate::shared::components::form_fields::{non_empty, optional_text};
use crate::shared::components::stat_card::StatTone;
use crate::shared::components::{
    DataTable, EntitySelect, FormActions, Modal, NumberField, PageHeader, PaginationControls,
    StatCard, TextField,
};
use crate::shared::date_utils::parse_date_input;
use crate::shared::feedback::{use_toasts, ToastService};
use crate::shared::form::FormHandle;
use crate::shared::icons::icon;
use crate::shared::list::{fetch_lookup, to_options, ListEntity, ListHandle, LoadedPage, RowAction};
use crate::shared::number_format::{format_count, format_currency};

#[component]
pub fn SaleList() -> impl IntoView {
    let api = use_context::<HttpApi>().expect("HttpApi not found in component tree");
    let stored_api = StoredValue::new(api.clone());

    let tracker = RwSignal::new(SummaryTracker::default());
    let summary = Memo::new(move |_| tracker.with(|t| t.summary()));
    let refresh_summary = Callback::new(move |loaded: LoadedPage<SaleFilter>| {
        let api = stored_api.get_value();
        tracker.update(|t| t.begin(loaded.token));
        spawn_local(async move {
            let result = fetch_summary(&api, &loaded.filters, loaded.total).await;
            tracker.try_update(|t| t.complete(loaded.token, result));
        });
    });

    let list = ListHandle::<Sale, HttpApi>::new(api.clone()).with_after_load(refresh_summary);
    let form = FormHandle::<Sale, HttpApi, ToastService>::new(
        api,
        use_toasts(),
        Callback::new(move |_| list.reload()),
    );

    let products = RwSignal::new(Vec::<Product>::new());
    let product_options = Signal::derive(move || products.with(|items| to_options(items)));
    let load_products = move || {
        let api = stored_api.get_value();
        spawn_local(async move {
            match fetch_lookup::<Product, _>(&api, PRODUCT_LOOKUP_SIZE).await {
                Ok(items) => products.set(items),
                Err(e) => log::error!("Error loading products: {}", e),
            }
        });
    };

    let on_action = Callback::new(move |(action, id): (RowAction, EntityId)| {
        if action == RowAction::Delete {
            form.delete(id);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let apply_dates = move || {
        list.apply_filters(SaleFilter {
            start_date: parse_date_input(&start_date.get_untracked()),
            end_date: parse_date_input(&end_date.get_untracked()),
        });
    };

    let live_total = Signal::derive(move || {
        form.state().with(|s| format_currency(s.draft.computed_total()))
    });

    list.load(1, SaleFilter::default());
    load_products();

    view! {
        <div class="page">
            <PageHeader title="Sales" icon_name="sales" count=list.total()>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.export_csv("sales.csv")
                >
                    {icon("download")}
                    " Export"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        load_products();
                        form.open_create();
                    }
                >
                    {icon("plus")}
                    " Record Sale"
                </Button>
            </PageHeader>

            <div class="stat-cards">
                <StatCard
                    label="Total Sales"
                    icon_name="sales"
                    tone=StatTone::Success
                    value=Signal::derive(move || format_currency(summary.get().total_sales))
                />
                <StatCard
                    label="Transactions"
                    icon_name="sales"
                    tone=StatTone::Primary
                    value=Signal::derive(move || format_count(summary.get().transactions))
                />
                <StatCard
                    label="Average Sale"
                    icon_name="sales"
                    tone=StatTone::Info
                    value=Signal::derive(move || format_currency(summary.get().average()))
                />
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="mb-3">
                            <label class="form-label">"Start Date"</label>
                            <input
                                type="date"
                                class="form-control"
                                prop:value=move || start_date.get()
                                on:change=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">"End Date"</label>
                            <input
                                type="date"
                                class="form-control"
                                prop:value=move || end_date.get()
                                on:change=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_dates()>
                                "Filter"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| {
                                    start_date.set(String::new());
                                    end_date.set(String::new());
                                    apply_dates();
                                }
                            >
                                "Clear"
                            </Button>
                        </div>
                    </Flex>
                </div>
                <DataTable
                    headers=Sale::headers()
                    with_actions=true
                    rows=list.rows()
                    on_action=on_action
                />
                <PaginationControls
                    links=list.page_links()
                    on_page_change=Callback::new(move |page| list.go_to_page(page))
                />
            </div>

            <Show when=move || form.is_open().get()>
                <Modal title="Record Sale".to_string() on_close=Callback::new(move |_| form.close())>
                    <form on:submit=on_submit>
                        <EntitySelect
                            label="Product"
                            placeholder="Select Product"
                            required=true
                            options=product_options
                            selected=Signal::derive(move || form.state().with(|s| s.draft.product_id))
                            on_change=Callback::new(move |id| {
                                products.with_untracked(|items| {
                                    form.update_draft(|d| select_product(d, items, id))
                                })
                            })
                        />
                        <NumberField
                            label="Quantity"
                            step="1"
                            required=true
                            value=Signal::derive(move || form.state().with(|s| Some(s.draft.quantity_sold as f64)))
                            on_input=Callback::new(move |v: Option<f64>| {
                                form.update_draft(|d| d.quantity_sold = v.map_or(0, |n| n as i64))
                            })
                        />
                        <NumberField
                            label="Unit Price"
                            step="0.01"
                            required=true
                            value=Signal::derive(move || form.state().with(|s| Some(s.draft.unit_price)))
                            on_input=Callback::new(move |v: Option<f64>| {
                                form.update_draft(|d| d.unit_price = v.unwrap_or(0.0))
                            })
                        />
                        <TextField
                            label="Customer Name"
                            placeholder="Walk-in"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.customer_name)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.customer_name = non_empty(v)))
                        />
                        <div class="mb-3">
                            <label class="form-label">"Total Amount"</label>
                            <div class="form-control-plaintext fw-bold">{move || live_total.get()}</div>
                        </div>
                        <FormActions
                            submitting=Signal::derive(move || form.state().with(|s| s.submitting))
                            on_cancel=Callback::new(move |_| form.close())
                            submit_label="Record Sale"
                        />
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
