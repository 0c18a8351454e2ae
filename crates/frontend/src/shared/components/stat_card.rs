use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Primary,
    Success,
    Info,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Primary => "stat-card stat-card--primary",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Info => "stat-card stat-card--info",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
