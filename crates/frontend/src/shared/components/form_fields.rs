//! Labelled inputs used by the entity modals

use contracts::domain::EntityId;
use leptos::prelude::*;

use crate::shared::list::SelectOption;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// HTML input type, "text" by default
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// `step` attribute for numeric inputs
    #[prop(optional)]
    step: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                class="form-control"
                type=input_type.unwrap_or("text")
                step=step
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Numeric input bound to an optional number.
///
/// The displayed text is memoized on the parsed value, so partial input
/// like `"12."` is not overwritten while typing.
#[component]
pub fn NumberField(
    label: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
    on_input: Callback<Option<f64>>,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let text = Memo::new(move |_| value.get().map(|n| n.to_string()).unwrap_or_default());

    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                class="form-control"
                type="number"
                step=step.unwrap_or("any")
                min="0"
                required=required
                prop:value=move || text.get()
                on:input=move |ev| on_input.run(parse_number(&event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <textarea
                class="form-control"
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn CheckboxField(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form-check mb-3">
            <input
                class="form-check-input"
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <label class="form-check-label">{label}</label>
        </div>
    }
}

/// Dropdown over fetched records; the empty option maps to `None`
#[component]
pub fn EntitySelect(
    #[prop(optional)] label: Option<&'static str>,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Option<EntityId>>,
    on_change: Callback<Option<EntityId>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            {label.map(|label| view! { <label class="form-label">{label}</label> })}
            <select
                class="form-select"
                required=required
                prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| on_change.run(event_target_value(&ev).parse::<EntityId>().ok())
            >
                <option value="">{placeholder}</option>
                {move || {
                    options.get()
                        .into_iter()
                        .map(|option| {
                            let value = option.value;
                            view! {
                                <option
                                    value=value.to_string()
                                    selected=move || selected.get() == Some(value)
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Cancel and submit buttons at the bottom of a modal form
#[component]
pub fn FormActions(
    #[prop(into)] submitting: Signal<bool>,
    on_cancel: Callback<()>,
    submit_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="modal-footer">
            <button
                type="button"
                class="btn btn-secondary"
                on:click=move |_| on_cancel.run(())
                disabled=move || submitting.get()
            >
                "Cancel"
            </button>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Saving..." } else { submit_label }}
            </button>
        </div>
    }
}

/// Text of an optional string field inside a draft
pub fn optional_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Blank or malformed numeric input reads as no value
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Blank input clears an optional string field; typed text is kept as is
pub fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
