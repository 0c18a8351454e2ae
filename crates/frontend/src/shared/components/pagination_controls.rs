use leptos::ev;
use leptos::prelude::*;

use crate::shared::list::PageLink;

/// Windowed pagination list: Previous, page numbers with gaps, Next
#[component]
pub fn PaginationControls(
    #[prop(into)] links: Signal<Vec<PageLink>>,
    /// Called with the 1-based page to load
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav aria-label="Pagination">
            <ul class="pagination justify-content-center">
                {move || {
                    links.get()
                        .into_iter()
                        .map(|link| render_link(link, on_page_change))
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

fn render_link(link: PageLink, on_page_change: Callback<u32>) -> AnyView {
    match link {
        PageLink::Previous { target, enabled } => {
            page_item("Previous".to_string(), target, enabled, false, on_page_change)
        }
        PageLink::Page { number, current } => {
            page_item(number.to_string(), number, true, current, on_page_change)
        }
        PageLink::Gap => view! {
            <li class="page-item disabled"><span class="page-link">"..."</span></li>
        }
        .into_any(),
        PageLink::Next { target, enabled } => {
            page_item("Next".to_string(), target, enabled, false, on_page_change)
        }
    }
}

fn page_item(
    label: String,
    target: u32,
    enabled: bool,
    active: bool,
    on_page_change: Callback<u32>,
) -> AnyView {
    let class = if active {
        "page-item active"
    } else if !enabled {
        "page-item disabled"
    } else {
        "page-item"
    };

    view! {
        <li class=class>
            <a
                class="page-link"
                href="#"
                on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    if enabled {
                        on_page_change.run(target);
                    }
                }
            >
                {label}
            </a>
        </li>
    }
    .into_any()
}
