//! Top navigation bar: brand, section links, signed-in user and logout

use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::AppConfig;
use crate::shared::feedback::use_toasts;
use crate::shared::icons::icon;
use crate::system::auth::context::{logout, use_auth};
use crate::system::auth::guard::BrowserNavigator;
use crate::system::auth::storage::{LocalSessionStore, Session};

/// (path, label, icon)
pub const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("/categories", "Categories", "categories"),
    ("/products", "Products", "products"),
    ("/suppliers", "Suppliers", "suppliers"),
    ("/sales", "Sales", "sales"),
];

/// Name for the navbar: the live session wins over the user the page was guarded with
pub fn header_name(session: Option<&Session>, guarded: &SessionUser) -> String {
    session
        .map(|s| s.user.display_name())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| guarded.display_name())
        .to_string()
}

#[component]
pub fn TopHeader(user: SessionUser, active: Option<&'static str>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in component tree");
    let auth = use_auth();
    let toasts = use_toasts();
    let login_path = StoredValue::new(config.login_path);
    let user_name = Memo::new(move |_| auth.session.with(|s| header_name(s.as_ref(), &user)));

    let on_logout = move |_| {
        let identity = auth.identity.get_value();
        spawn_local(async move {
            let result = logout(
                &identity,
                &LocalSessionStore,
                &BrowserNavigator,
                &toasts,
                &login_path.get_value(),
            )
            .await;
            if result.is_ok() {
                auth.session.set(None);
            }
        });
    };

    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                <a class="top-header__title" href="/products">"SCD Admin"</a>
            </div>

            <ul class="top-header__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|&(path, label, icon_name)| {
                        let class = if active == Some(path) {
                            "top-header__link top-header__link--active"
                        } else {
                            "top-header__link"
                        };
                        view! {
                            <li>
                                <a class=class href=path>
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{move || user_name.get()}</span>
                </div>
                <button class="top-header__icon-btn" on:click=on_logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </nav>
    }
}
