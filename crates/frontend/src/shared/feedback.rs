//! User feedback ports: transient alerts and confirmation dialogs

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertLevel {
    pub fn class(self) -> &'static str {
        match self {
            AlertLevel::Success => "alert alert-success",
            AlertLevel::Danger => "alert alert-danger",
            AlertLevel::Warning => "alert alert-warning",
            AlertLevel::Info => "alert alert-info",
        }
    }
}

/// Shows a transient message to the user
pub trait Notifier: Clone + Send + Sync + 'static {
    fn notify(&self, level: AlertLevel, message: String);
}

/// Asks the user to confirm a destructive action
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm` dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirmer for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
}

/// Queue of alerts rendered by [`ToastHost`], each dismissed after 5 seconds
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, level: AlertLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            service.dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in component tree")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class() role="alert">
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="button button--icon"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
