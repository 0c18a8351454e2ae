pub mod top_header;

use contracts::system::auth::SessionUser;
use leptos::prelude::*;
use top_header::TopHeader;

use crate::shared::feedback::ToastHost;

/// Application shell for authenticated pages.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (brand, nav, user, logout)    |
/// +------------------------------------------+
/// |               page content               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    user: SessionUser,
    /// Path of the highlighted navbar entry
    active: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader user=user active=active />
            <ToastHost />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
