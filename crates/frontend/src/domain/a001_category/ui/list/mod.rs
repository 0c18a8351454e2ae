use contracts::domain::a001_category::{Category, CategoryFilter};
use contracts::domain::EntityId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::{parent_candidates, PARENT_LOOKUP_SIZE};
use crate::shared::api::HttpApi;
use crate::shared::components::form_fields::{non_empty, optional_text};
use crate::shared::components::{
    DataTable, EntitySelect, FormActions, Modal, PageHeader, PaginationControls, TextAreaField,
    TextField,
};
use crate::shared::feedback::{use_toasts, ToastService};
use crate::shared::form::{FormHandle, FormMode};
use crate::shared::icons::icon;
use crate::shared::list::{fetch_lookup, to_options, ListEntity, ListHandle, RowAction};

#[component]
pub fn CategoryList() -> impl IntoView {
    let api = use_context::<HttpApi>().expect("HttpApi not found in component tree");
    let list = ListHandle::<Category, HttpApi>::new(api.clone());
    let form = FormHandle::<Category, HttpApi, ToastService>::new(
        api.clone(),
        use_toasts(),
        Callback::new(move |_| list.reload()),
    );
    let api = StoredValue::new(api);
    let categories = RwSignal::new(Vec::<Category>::new());

    let load_parents = move || {
        let api = api.get_value();
        spawn_local(async move {
            match fetch_lookup::<Category, _>(&api, PARENT_LOOKUP_SIZE).await {
                Ok(items) => categories.set(items),
                Err(e) => log::error!("Error loading parent categories: {}", e),
            }
        });
    };

    let editing_id = move || {
        form.state().with(|s| match s.mode {
            Some(FormMode::Edit(id)) => Some(id),
            _ => None,
        })
    };
    let parent_options =
        Signal::derive(move || categories.with(|all| to_options(&parent_candidates(all, editing_id()))));

    let title = Signal::derive(move || {
        if editing_id().is_some() {
            "Edit Category".to_string()
        } else {
            "Add Category".to_string()
        }
    });

    let on_action = Callback::new(move |(action, id): (RowAction, EntityId)| match action {
        RowAction::Edit => {
            load_parents();
            form.open_edit(id);
        }
        RowAction::Delete => form.delete(id),
        RowAction::View => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    list.load(1, CategoryFilter::default());
    load_parents();

    view! {
        <div class="page">
            <PageHeader title="Categories" icon_name="categories" count=list.total()>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.export_csv("categories.csv")
                >
                    {icon("download")}
                    " Export"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        load_parents();
                        form.open_create();
                    }
                >
                    {icon("plus")}
                    " Add Category"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    headers=Category::headers()
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
                            label="Category Name"
                            value=Signal::derive(move || form.state().with(|s| s.draft.category_name.clone()))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.category_name = v))
                            required=true
                        />
                        <TextAreaField
                            label="Description"
                            value=Signal::derive(move || form.state().with(|s| optional_text(&s.draft.description)))
                            on_input=Callback::new(move |v| form.update_draft(|d| d.description = non_empty(v)))
                        />
                        <EntitySelect
                            label="Parent Category"
                            placeholder="None (Root Category)"
                            options=parent_options
                            selected=Signal::derive(move || form.state().with(|s| s.draft.parent_category_id))
                            on_change=Callback::new(move |id| form.update_draft(|d| d.parent_category_id = id))
                        />
                        <FormActions
                            submitting=Signal::derive(move || form.state().with(|s| s.submitting))
                            on_cancel=Callback::new(move |_| form.close())
                            submit_label="Save Category"
                        />
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
