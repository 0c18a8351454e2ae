use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Quiet period before a typed search is applied
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Tracks the latest keystroke; an armed timer fires only if nothing newer came in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    latest: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Search box that reports its value after `SEARCH_DEBOUNCE_MS` without typing
#[component]
pub fn SearchInput(
    /// Applied search text
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let input_value = RwSignal::new(value.get_untracked());
    let gate = StoredValue::new(DebounceGate::default());

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        let ticket = gate.try_update_value(|g| g.arm()).unwrap_or_default();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if gate.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                on_change.run(new_value.trim().to_string());
            }
        });
    };

    let clear_filter = move |_: leptos::ev::MouseEvent| {
        gate.update_value(|g| {
            g.arm();
        });
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button type="button" class="search-input__clear" title="Clear" on:click=clear_filter>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_keystroke_fires() {
        let mut gate = DebounceGate::default();
        let first = gate.arm();
        let second = gate.arm();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_clearing_cancels_pending_search() {
        let mut gate = DebounceGate::default();
        let pending = gate.arm();
        gate.arm();
        assert!(!gate.is_current(pending));
    }
}
