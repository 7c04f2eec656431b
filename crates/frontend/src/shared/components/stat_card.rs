use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = nothing recorded)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into, optional)]
    status: Option<Signal<IndicatorStatus>>,
    /// Brand colour for the icon badge
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let status_class = move || {
        let status = status.map(|s| s.get()).unwrap_or(IndicatorStatus::Neutral);
        format!("stat-card stat-card--{}", status.css_modifier())
    };

    let formatted = move || match value.get() {
        Some(v) => format.format(v),
        None => "—".to_string(),
    };

    let icon_style = accent
        .map(|color| format!("color: {};", color))
        .unwrap_or_default();

    view! {
        <div class=status_class>
            <div class="stat-card__icon" style=icon_style>
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
