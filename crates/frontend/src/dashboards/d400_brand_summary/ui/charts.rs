//! CSS bar charts for the brand panel.

use crate::shared::i18n::{country_name, tr, Label};
use crate::shared::state::AuditStore;
use contracts::dashboards::d400_brand_summary::BrandSummary;
use contracts::shared::indicators::ValueFormat;
use contracts::shared::number_format::format_percent;
use leptos::prelude::*;

/// Bar length relative to the largest bar, in percent
fn bar_percent(amount: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (amount / max * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
pub fn CountryBudgetChart(store: AuditStore, summary: Memo<BrandSummary>) -> impl IntoView {
    let rows = move || {
        let lang = store.language();
        summary.with(|s| {
            let max = s.max_country_budget();
            s.budget_by_country
                .iter()
                .map(|row| {
                    let width = format!("width: {:.1}%;", bar_percent(row.amount, max));
                    view! {
                        <div class="bar-chart__row">
                            <span class="bar-chart__label">{country_name(lang, row.country)}</span>
                            <div class="bar-chart__track">
                                <div class="bar-chart__bar" style=width></div>
                            </div>
                            <span class="bar-chart__value">{ValueFormat::euro().format(row.amount)}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="chart">
            <h4 class="chart__title">{move || tr(store.language(), Label::BudgetByMarket)}</h4>
            <div class="bar-chart">{rows}</div>
        </div>
    }
}

#[component]
pub fn PlatformShareChart(store: AuditStore, summary: Memo<BrandSummary>) -> impl IntoView {
    let segments = move || {
        summary.with(|s| {
            s.platform_shares()
                .into_iter()
                .map(|(platform, share)| {
                    let style = format!(
                        "width: {:.1}%; background: {};",
                        share * 100.0,
                        platform.color()
                    );
                    view! { <div class="share-chart__segment" style=style title=platform.display_name()></div> }
                })
                .collect_view()
        })
    };

    let legend = move || {
        summary.with(|s| {
            s.budget_by_platform
                .iter()
                .zip(s.platform_shares())
                .map(|(row, (platform, share))| {
                    view! {
                        <div class="share-chart__legend-row">
                            <span class="platform-dot" style=format!("background: {};", platform.color())></span>
                            <span class="share-chart__name">{platform.display_name()}</span>
                            <span class="share-chart__share">{format_percent(share * 100.0)}</span>
                            <span class="share-chart__amount">{ValueFormat::euro().format(row.amount)}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="chart">
            <h4 class="chart__title">{move || tr(store.language(), Label::BudgetByPlatform)}</h4>
            <Show
                when=move || summary.with(|s| !s.budget_by_platform.is_empty())
                fallback=move || view! {
                    <div class="chart__empty">{move || tr(store.language(), Label::NoSpend)}</div>
                }
            >
                <div class="share-chart__bar">{segments}</div>
                <div class="share-chart__legend">{legend}</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_largest() {
        assert_eq!(bar_percent(500.0, 1000.0), 50.0);
        assert_eq!(bar_percent(1000.0, 1000.0), 100.0);
        assert_eq!(bar_percent(0.0, 0.0), 0.0);
    }
}
