use crate::routes::routes::AppRoutes;
use crate::shared::api::HttpApi;
use crate::shared::config::AppConfig;
use crate::shared::feedback::ToastService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    log::debug!("API base: {}", config.api_base);

    provide_context(HttpApi::new(config.api_base.clone()));
    provide_context(ToastService::new());
    provide_context(config);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
