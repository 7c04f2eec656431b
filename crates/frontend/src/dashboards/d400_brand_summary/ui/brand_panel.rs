use super::charts::{CountryBudgetChart, PlatformShareChart};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::StatCard;
use crate::shared::i18n::{country_name, tr, Label};
use crate::shared::icons::icon;
use crate::shared::state::AuditStore;
use chrono::{NaiveDate, Utc};
use contracts::dashboards::d400_brand_summary::{executive_summary, BrandSummary};
use contracts::enums::BrandId;
use contracts::shared::indicators::{engagement_status, IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn BrandPanel(store: AuditStore, brand: BrandId) -> impl IntoView {
    let summary = Memo::new(move |_| store.with(|s| BrandSummary::compute(s, brand)));
    let copied = RwSignal::new(false);
    let text = move |label: Label| Signal::derive(move || tr(store.language(), label).to_string());

    let on_copy = move |_| {
        let (lang, date) = store.with_untracked(|s| {
            let date = NaiveDate::parse_from_str(&s.general_info.date, "%Y-%m-%d")
                .unwrap_or_else(|_| Utc::now().date_naive());
            (s.language, date)
        });
        let brief = summary.with_untracked(|summary| {
            executive_summary(summary, date, |country| country_name(lang, country).to_string())
        });
        copy_to_clipboard_with_callback(&brief, move || {
            copied.set(true);
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                copied.set(false);
            });
        });
    };

    view! {
        <section class="brand-panel" style=format!("--brand-accent: {};", brand.accent_color())>
            <header class="brand-panel__header">
                <h2>{brand.display_name()}</h2>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=on_copy>
                    {move || if copied.get() { icon("check") } else { icon("copy") }}
                    " "
                    {move || {
                        let label = if copied.get() { Label::Copied } else { Label::CopySummary };
                        tr(store.language(), label)
                    }}
                </Button>
            </header>

            <div class="brand-panel__cards">
                <StatCard
                    label=text(Label::TotalBudget)
                    icon_name="wallet"
                    value=Signal::derive(move || Some(summary.with(|s| s.total_budget)))
                    format=ValueFormat::euro()
                    accent=brand.accent_color()
                />
                <StatCard
                    label=text(Label::TotalFollowers)
                    icon_name="users"
                    value=Signal::derive(move || Some(summary.with(|s| s.total_followers)))
                    format=ValueFormat::Integer
                    accent=brand.accent_color()
                />
                <StatCard
                    label=text(Label::AvgEngagement)
                    icon_name="activity"
                    value=Signal::derive(move || summary.with(|s| s.average_engagement))
                    format=ValueFormat::Percent { decimals: 2 }
                    status=Signal::derive(move || {
                        summary
                            .with(|s| s.average_engagement)
                            .map(engagement_status)
                            .unwrap_or(IndicatorStatus::Neutral)
                    })
                    accent=brand.accent_color()
                />
                <StatCard
                    label=text(Label::ActiveRecommendations)
                    icon_name="lightbulb"
                    value=Signal::derive(move || Some(summary.with(|s| s.recommendation_count) as f64))
                    format=ValueFormat::Integer
                    accent=brand.accent_color()
                />
            </div>

            <div class="brand-panel__charts">
                <CountryBudgetChart store=store summary=summary />
                <PlatformShareChart store=store summary=summary />
            </div>
        </section>
    }
}
