use super::country_audit::MetricsMode;
use super::fields::TriStateSelect;
use super::metrics_table::MetricsTable;
use super::platform_profile::PlatformProfile;
use crate::shared::i18n::{period_label, tr, Label};
use crate::shared::state::AuditStore;
use contracts::domain::a001_brand_market::BrandEdit;
use contracts::enums::{AnalysisPeriod, BrandId, CountryId, TriState};
use leptos::prelude::*;

/// One brand entry of a market: general fields, profiles and metrics.
#[component]
pub fn BrandSection(
    store: AuditStore,
    country: CountryId,
    brand: BrandId,
    mode: RwSignal<MetricsMode>,
) -> impl IntoView {
    let edit = move |edit: BrandEdit| store.edit_brand(country, brand, edit);
    let text = move |label: Label| move || tr(store.language(), label);

    view! {
        <section class="brand-section" style=format!("--brand-accent: {};", brand.accent_color())>
            <header class="brand-section__header">
                <h3>{brand.display_name()}</h3>
                <span class="brand-section__market">{country.code().to_uppercase()}</span>
            </header>

            <div class="brand-section__general form-grid">
                <div class="form-group">
                    <label>{text(Label::Manager)}</label>
                    <input
                        type="text"
                        prop:value=move || store.read_brand(country, brand, |e| e.manager.clone())
                        on:input=move |ev| edit(BrandEdit::Manager(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label>{text(Label::HasCalendar)}</label>
                    <TriStateSelect
                        store=store
                        value=Signal::derive(move || store.read_brand(country, brand, |e| e.has_calendar))
                        on_change=move |v: TriState| edit(BrandEdit::HasCalendar(v))
                    />
                </div>

                <div class="form-group">
                    <label>{text(Label::AnalysisPeriod)}</label>
                    <select on:change=move |ev| {
                        let period = AnalysisPeriod::from(event_target_value(&ev));
                        edit(BrandEdit::AnalysisPeriod(period));
                    }>
                        {AnalysisPeriod::all().into_iter().map(|period| view! {
                            <option
                                value=period.code()
                                selected=move || store.read_brand(country, brand, |e| e.analysis_period) == period
                            >
                                {move || period_label(store.language(), period)}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group form-group--wide">
                    <label>{text(Label::Strategy)}</label>
                    <textarea
                        rows="3"
                        prop:value=move || store.read_brand(country, brand, |e| e.strategy.clone())
                        on:input=move |ev| edit(BrandEdit::Strategy(event_target_value(&ev)))
                    />
                </div>
            </div>

            <PlatformProfile store=store country=country brand=brand />

            <h4 class="brand-section__subtitle">
                {text(Label::Metrics)}
                " · "
                {move || match mode.get() {
                    MetricsMode::Organic => tr(store.language(), Label::Organic),
                    MetricsMode::Paid => tr(store.language(), Label::Paid),
                }}
            </h4>
            <MetricsTable store=store country=country brand=brand mode=mode />
        </section>
    }
}
