use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

/// Visual accent of a stat card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatAccent {
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatAccent {
    fn value_class(&self) -> &'static str {
        match self {
            StatAccent::Neutral => "stat-card__value",
            StatAccent::Success => "stat-card__value stat-card__value--success",
            StatAccent::Error => "stat-card__value stat-card__value--error",
        }
    }
}

/// StatCard — summary figure above the invoice table.
///
/// Shows an em-dash until the value arrives.
#[component]
pub fn StatCard(
    /// Label displayed below the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Pre-formatted value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Visual accent
    #[prop(optional)]
    accent: StatAccent,
) -> impl IntoView {
    let theme = use_theme();
    let icon_color = match accent {
        StatAccent::Neutral => theme.primary,
        StatAccent::Success => theme.success,
        StatAccent::Error => theme.error,
    };

    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    view! {
        <div class="stat-card">
            <div class="stat-card__icon" style=format!("color: {};", icon_color)>
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class=accent.value_class()>{formatted}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
