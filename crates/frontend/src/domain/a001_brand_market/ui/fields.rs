//! Small inputs shared by the brand tables.

use crate::shared::i18n::tri_state_label;
use crate::shared::state::AuditStore;
use contracts::domain::a001_brand_market::parse_metric_input;
use contracts::enums::TriState;
use contracts::shared::indicators::IndicatorStatus;
use leptos::prelude::*;

/// Text shown in a metric cell; zero is left blank so the placeholder shows.
fn metric_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Numeric cell. Commits on change; unparsable or negative input stores 0.
#[component]
pub fn MetricInput(
    #[prop(into)] value: Signal<f64>,
    fractional: bool,
    #[prop(into)] on_change: Callback<f64>,
    #[prop(into)] status: Signal<IndicatorStatus>,
) -> impl IntoView {
    let class = move || format!("metric-input metric-input--{}", status.get().css_modifier());

    view! {
        <input
            type="text"
            inputmode={if fractional { "decimal" } else { "numeric" }}
            class=class
            placeholder="0"
            prop:value=move || metric_text(value.get())
            on:change=move |ev| on_change.run(parse_metric_input(&event_target_value(&ev)))
        />
    }
}

#[component]
pub fn TriStateSelect(
    store: AuditStore,
    #[prop(into)] value: Signal<TriState>,
    #[prop(into)] on_change: Callback<TriState>,
) -> impl IntoView {
    view! {
        <select
            class=move || format!("tri-state tri-state--{}", value.get().code())
            on:change=move |ev| {
                if let Some(v) = TriState::from_code(&event_target_value(&ev)) {
                    on_change.run(v);
                }
            }
        >
            {TriState::all().into_iter().map(|option| view! {
                <option value=option.code() selected=move || value.get() == option>
                    {move || tri_state_label(store.language(), option)}
                </option>
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_blank() {
        assert_eq!(metric_text(0.0), "");
        assert_eq!(metric_text(1500.0), "1500");
        assert_eq!(metric_text(3.25), "3.25");
    }
}
