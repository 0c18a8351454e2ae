use contracts::domain::a003_supplier::{Supplier, SupplierFilter};
use contracts::domain::EntityId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::*;

use crate::shared::api::HttpApi;
use crate::shared::components::form_fields::{non_empty, optional_text};
use crate::shared::components::{
    DataTable, FormActions, Modal, PageHeader, PaginationControls, TextAreaField, TextField,
};
use crate::shared::feedback::{use_toasts, ToastService};
use crate::shared::form::{FormHandle, FormMode};
use crate::shared::icons::icon;
use crate::shared::list::{ListEntity, ListHandle, RowAction};
use crate::shared::list_utils::SearchInput;

#[component]
pub fn SupplierList() -> impl IntoView {
    let api = use_context::<HttpApi>().expect("HttpApi not found in component tree");
    let list = ListHandle::<Supplier, HttpApi>::new(api.clone());
    let form = FormHandle::<Supplier, HttpApi, ToastService>::new(
        api,
        use_toasts(),
        Callback::new(move |_| list.reload()),
    );

    let title = Signal::derive(move || {
        match form.state().with(|s| s.mode) {
            Some(FormMode::Edit(_)) => "Edit Supplier",
            _ => "Add Supplier",
        }
        .to_string()
    });

    let on_action = Callback::new(move |(action, id): (RowAction, EntityId)| match action {
        RowAction::Edit => form.open_edit(id),
        RowAction::Delete => form.delete(id),
        RowAction::View => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    let search = Signal::derive(move || list.state().with(|c| c.filters().search.clone()));
    let on_search = Callback::new(move |text: String| list.update_filters(|f| f.search = text));

    list.load(1, SupplierFilter::default());

    view! {
        <div class="page">
            <PageHeader title="Suppliers" icon_name="suppliers" count=list.total()>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.export_csv("suppliers.csv")
                >
                    {icon("download")}
                    " Export"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| form.open_create()>
                    {icon("plus")}
                    " Add Supplier"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <SearchInput
                        value=search
                        on_change=on_search
                        placeholder="Search suppliers..."
                    />
                </div>
                <DataTable
                    headers=Supplier::headers()
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
                            label="Supplier Name"
                            value=Signal::derive(move || form.state().with(|s| s.draft.supplier_name.clone()))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.supplier_name = v))
                            required=true
                        />
                        <TextField
                            label="Contact Person"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.contact_person)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.contact_person = non_empty(v)))
                        />
                        <TextField
                            label="Email"
                            input_type="email"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.email)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.email = non_empty(v)))
                        />
                        <TextField
                            label="Phone"
                            input_type="tel"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.phone)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.phone = non_empty(v)))
                        />
                        <TextAreaField
                            label="Address"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.address)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.address = non_empty(v)))
                        />
                        <FormActions
                            submitting=Signal::derive(move || form.state().with(|s| s.submitting))
                            on_cancel=Callback::new(move |_| form.close())
                            submit_label="Save Supplier"
                        />
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
