use contracts::domain::EntityId;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::list::{Cell, RowAction, RowDescriptor};

/// Table body driven by row descriptors.
///
/// Record values are only ever rendered as text nodes.
#[component]
pub fn DataTable(
    /// Column titles, without the actions column
    headers: &'static [&'static str],
    /// Adds the trailing "Actions" header
    #[prop(optional)]
    with_actions: bool,
    #[prop(into)] rows: Signal<Vec<RowDescriptor>>,
    /// Fired when a row action button is clicked
    on_action: Callback<(RowAction, EntityId)>,
) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="table table-hover">
                <thead>
                    <tr>
                        {headers.iter().map(|header| view! { <th>{*header}</th> }).collect_view()}
                        {with_actions.then(|| view! { <th>"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| render_row(row, on_action))
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(row: RowDescriptor, on_action: Callback<(RowAction, EntityId)>) -> AnyView {
    match row {
        RowDescriptor::Data(data) => {
            let id = data.id;
            let actions = data.actions;
            view! {
                <tr>
                    {data.cells.into_iter().map(render_cell).collect_view()}
                    {(!actions.is_empty()).then(|| view! {
                        <td class="table-actions">
                            {actions.iter().map(|&action| view! {
                                <button
                                    class=action.button_class()
                                    title=action.title()
                                    on:click=move |_| on_action.run((action, id))
                                >
                                    {icon(action.icon_name())}
                                </button>
                            }).collect_view()}
                        </td>
                    })}
                </tr>
            }
            .into_any()
        }
        RowDescriptor::Placeholder { message, colspan } => view! {
            <tr>
                <td colspan=colspan.to_string() class="text-center text-muted">{message}</td>
            </tr>
        }
        .into_any(),
        RowDescriptor::Loading { colspan } => view! {
            <tr>
                <td colspan=colspan.to_string() class="text-center">
                    <Spinner />
                    <span class="visually-hidden">"Loading..."</span>
                </td>
            </tr>
        }
        .into_any(),
        RowDescriptor::Error { message, colspan } => view! {
            <tr>
                <td colspan=colspan.to_string() class="text-center text-danger">{message}</td>
            </tr>
        }
        .into_any(),
    }
}

fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Strong(text) => view! { <td><strong>{text}</strong></td> }.into_any(),
        Cell::Badge { text, tone } => view! {
            <td><span class=tone.class()>{text}</span></td>
        }
        .into_any(),
    }
}
