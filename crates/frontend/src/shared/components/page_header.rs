use leptos::prelude::*;

use crate::shared::icons::icon;

/// Title row of a management page; children go to the right-hand actions slot
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    icon_name: &'static str,
    /// Total records of the current filter, shown next to the title
    #[prop(optional, into)]
    count: Option<Signal<u64>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon(icon_name)}
                <h1 class="page__title">{title}</h1>
                {count.map(|n| view! { <span class="badge bg-primary">{move || n.get()}</span> })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
