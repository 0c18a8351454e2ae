use contracts::domain::EntityId;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_sale::ui::list::SaleList;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::system::auth::guard::{AuthGuard, BrowserNavigator, GuardDecision, Navigator};
use crate::system::auth::storage::LocalSessionStore;
use crate::system::pages::login::LoginPage;

/// Pages of the panel. Navigation is full-page, so the path is read once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Categories,
    Products,
    ProductDetails(EntityId),
    Suppliers,
    Sales,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Products,
            ["login"] => Route::Login,
            ["categories"] => Route::Categories,
            ["products"] => Route::Products,
            ["products", id] => id
                .parse::<EntityId>()
                .map(Route::ProductDetails)
                .unwrap_or(Route::NotFound),
            ["suppliers"] => Route::Suppliers,
            ["sales"] => Route::Sales,
            _ => Route::NotFound,
        }
    }

    /// Navbar entry highlighted for this page
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Route::Categories => Some("/categories"),
            Route::Products | Route::ProductDetails(_) => Some("/products"),
            Route::Suppliers => Some("/suppliers"),
            Route::Sales => Some("/sales"),
            Route::Login | Route::NotFound => None,
        }
    }
}

fn page(route: Route) -> AnyView {
    match route {
        Route::Categories => view! { <CategoryList /> }.into_any(),
        Route::Products => view! { <ProductList /> }.into_any(),
        Route::ProductDetails(id) => view! { <ProductDetails id=id /> }.into_any(),
        Route::Suppliers => view! { <SupplierList /> }.into_any(),
        Route::Sales => view! { <SaleList /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::NotFound => view! {
            <div class="page">
                <h1 class="page__title">"Page not found"</h1>
                <a href="/products">"Back to Products"</a>
            </div>
        }
        .into_any(),
    }
}

/// Runs the auth guard for the current page load and mounts the page
#[component]
pub fn AppRoutes() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in component tree");
    let path = BrowserNavigator.current_path();
    let route = Route::parse(&path);
    let guard = AuthGuard::new(LocalSessionStore, BrowserNavigator, &config);

    match guard.check_page_load() {
        GuardDecision::Public if route == Route::Login && guard.is_authenticated() => {
            BrowserNavigator.redirect(&config.home_path);
            view! { <Spinner /> }.into_any()
        }
        GuardDecision::Public => page(route),
        GuardDecision::Allowed(user) => view! {
            <Shell user=user active=route.section()>
                {page(route)}
            </Shell>
        }
        .into_any(),
        GuardDecision::Redirected => view! { <Spinner /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::Products);
        assert_eq!(Route::parse("/categories/"), Route::Categories);
        assert_eq!(Route::parse("/products/42"), Route::ProductDetails(42));
        assert_eq!(Route::parse("/products/abc"), Route::NotFound);
        assert_eq!(Route::parse("/sales?start_date=2024-01-01"), Route::Sales);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/reports"), Route::NotFound);
    }

    #[test]
    fn test_details_page_highlights_products() {
        assert_eq!(Route::ProductDetails(3).section(), Some("/products"));
        assert_eq!(Route::Login.section(), None);
    }
}
