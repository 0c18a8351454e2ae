use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::{Product, ProductFilter, ProductStatus};
use contracts::domain::a003_supplier::Supplier;
use contracts::domain::EntityId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::{details_path, fetch_inventory_value, LOOKUP_SIZE};
use crate::shared::api::HttpApi;
use crate::shared::components::form_fields::{non_empty, optional_text};
use crate::shared::components::stat_card::StatTone;
use crate::shared::components::{
    CheckboxField, DataTable, EntitySelect, FormActions, Modal, NumberField, PageHeader,
    PaginationControls, StatCard, TextAreaField, TextField,
};
use crate::shared::feedback::{use_toasts, ToastService};
use crate::shared::form::{FormHandle, FormMode};
use crate::shared::icons::icon;
use crate::shared::list::{fetch_lookup, to_options, ListEntity, ListHandle, RowAction, SelectOption};
use crate::shared::list_utils::SearchInput;
use crate::shared::number_format::format_currency;
use crate::system::auth::guard::{BrowserNavigator, Navigator};

#[component]
pub fn ProductList() -> impl IntoView {
    let api = use_context::<HttpApi>().expect("HttpApi not found in component tree");
    let stored_api = StoredValue::new(api.clone());

    let inventory_value = RwSignal::new(Option::<f64>::None);
    let load_inventory = move || {
        let api = stored_api.get_value();
        spawn_local(async move {
            match fetch_inventory_value(&api).await {
                Ok(value) => inventory_value.set(Some(value)),
                Err(e) => log::error!("Error loading inventory value: {}", e),
            }
        });
    };

    let list = ListHandle::<Product, HttpApi>::new(api.clone())
        .with_after_load(Callback::new(move |_| load_inventory()));
    let form = FormHandle::<Product, HttpApi, ToastService>::new(
        api,
        use_toasts(),
        Callback::new(move |_| list.reload()),
    );

    let category_options = RwSignal::new(Vec::<SelectOption>::new());
    let supplier_options = RwSignal::new(Vec::<SelectOption>::new());
    let load_lookups = move || {
        let api = stored_api.get_value();
        spawn_local(async move {
            match fetch_lookup::<Category, _>(&api, LOOKUP_SIZE).await {
                Ok(items) => category_options.set(to_options(&items)),
                Err(e) => log::error!("Error loading categories: {}", e),
            }
            match fetch_lookup::<Supplier, _>(&api, LOOKUP_SIZE).await {
                Ok(items) => supplier_options.set(to_options(&items)),
                Err(e) => log::error!("Error loading suppliers: {}", e),
            }
        });
    };

    let title = Signal::derive(move || {
        match form.state().with(|s| s.mode) {
            Some(FormMode::Edit(_)) => "Edit Product",
            _ => "Add Product",
        }
        .to_string()
    });

    let on_action = Callback::new(move |(action, id): (RowAction, EntityId)| match action {
        RowAction::Edit => form.open_edit(id),
        RowAction::View => BrowserNavigator.redirect(&details_path(id)),
        RowAction::Delete => form.delete(id),
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    let search = Signal::derive(move || list.state().with(|c| c.filters().search.clone()));
    let category_filter = Signal::derive(move || list.state().with(|c| c.filters().category_id));

    list.load(1, ProductFilter::default());
    load_lookups();

    view! {
        <div class="page">
            <PageHeader title="Products" icon_name="products" count=list.total()>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.export_csv("products.csv")
                >
                    {icon("download")}
                    " Export"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| form.open_create()>
                    {icon("plus")}
                    " Add Product"
                </Button>
            </PageHeader>

            <div class="stat-cards">
                <StatCard
                    label="Inventory Value"
                    icon_name="products"
                    tone=StatTone::Primary
                    value=Signal::derive(move || {
                        inventory_value.get().map(format_currency).unwrap_or_else(|| "...".to_string())
                    })
                />
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |text: String| list.update_filters(|f| f.search = text))
                            placeholder="Search by name, SKU or barcode..."
                        />
                        <EntitySelect
                            placeholder="All Categories"
                            options=category_options
                            selected=category_filter
                            on_change=Callback::new(move |id| list.update_filters(|f| f.category_id = id))
                        />
                        <div class="mb-3">
                            <select
                                class="form-select"
                                on:change=move |ev| {
                                    let status = ProductStatus::parse(&event_target_value(&ev));
                                    list.update_filters(|f| f.status = status);
                                }
                            >
                                <option value="">"All Status"</option>
                                {ProductStatus::ALL
                                    .into_iter()
                                    .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </Flex>
                </div>
                <DataTable
                    headers=Product::headers()
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
                <Modal title=title on_close=Callback::new(move |_| form.close())>
                    <form on:submit=on_submit>
                        <TextField
                            label="Product Name"
                            value=Signal::derive(move || form.state().with(|s| s.draft.product_name.clone()))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.product_name = v))
                            required=true
                        />
                        <TextField
                            label="SKU"
                            value=Signal::derive(move || form.state().with(|s| s.draft.sku.clone()))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.sku = v))
                            required=true
                        />
                        <TextAreaField
                            label="Description"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.description)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.description = non_empty(v)))
                        />
                        <EntitySelect
                            label="Category"
                            placeholder="Select Category"
                            options=category_options
                            selected=Signal::derive(move || form.state().with(|s| s.draft.category_id))
                            on_change=Callback::new(move |id| form.update_draft(|d| d.category_id = id))
                        />
                        <EntitySelect
                            label="Supplier"
                            placeholder="Select Supplier"
                            options=supplier_options
                            selected=Signal::derive(move || form.state().with(|s| s.draft.supplier_id))
                            on_change=Callback::new(move |id| form.update_draft(|d| d.supplier_id = id))
                        />
                        <NumberField
                            label="Price"
                            step="0.01"
                            required=true
                            value=Signal::derive(move || form.state().with(|s| Some(s.draft.price)))
                            on_input=Callback::new(move |v: Option<f64>| form.update_draft(|d| d.price = v.unwrap_or(0.0)))
                        />
                        <NumberField
                            label="Cost Price"
                            step="0.01"
                            value=Signal::derive(move || form.state().with(|s| s.draft.cost_price))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.cost_price = v))
                        />
                        <NumberField
                            label="Quantity in Stock"
                            step="1"
                            required=true
                            value=Signal::derive(move || form.state().with(|s| Some(s.draft.quantity_in_stock as f64)))
                            on_input=Callback::new(move |v: Option<f64>| {
                                form.update_draft(|d| d.quantity_in_stock = v.map_or(0, |n| n as i64))
                            })
                        />
                        <NumberField
                            label="Reorder Level"
                            step="1"
                            value=Signal::derive(move || form.state().with(|s| Some(s.draft.reorder_level as f64)))
                            on_input=Callback::new(move |v: Option<f64>| {
                                form.update_draft(|d| d.reorder_level = v.map_or(0, |n| n as i64))
                            })
                        />
                        <TextField
                            label="Barcode"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.barcode)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.barcode = non_empty(v)))
                        />
                        <CheckboxField
                            label="Active"
                            checked=Signal::derive(move || form.state().with(|s| s.draft.is_active))
                            on_toggle=Callback::new(move |checked| form.update_draft(|d| d.is_active = checked))
                        />
                        <FormActions
                            submitting=Signal::derive(move || form.state().with(|s| s.submitting))
                            on_cancel=Callback::new(move |_| form.close())
                            submit_label="Save Product"
                        />
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
