use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::HttpApi;
use crate::shared::config::AppConfig;
use crate::system::auth::context::{login, use_auth};
use crate::system::auth::guard::{BrowserNavigator, Navigator};
use crate::system::auth::storage::LocalSessionStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in component tree");
    let api = use_context::<HttpApi>().expect("HttpApi not found in component tree");
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let home_path = StoredValue::new(config.home_path.clone());
    let api = StoredValue::new(api);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let identity = auth.identity.get_value();
        let api = api.get_value();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match login(&identity, &api, &LocalSessionStore, &email_val, &password_val).await {
                Ok(session) => {
                    auth.session.set(Some(session));
                    BrowserNavigator.redirect(&home_path.get_value());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SCD Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert-danger">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="mb-3">
                        <label for="email" class="form-label">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form-control"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="mb-3">
                        <label for="password" class="form-label">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form-control"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary w-100"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
