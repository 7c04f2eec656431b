use super::country_audit::MetricsMode;
use super::fields::MetricInput;
use crate::shared::i18n::{organic_label, paid_label, tr, Label};
use crate::shared::state::AuditStore;
use contracts::domain::a001_brand_market::{BrandEdit, OrganicField, PaidField, PlatformEdit};
use contracts::enums::{BrandId, CountryId, Platform};
use contracts::shared::indicators::{ctr_status, engagement_status, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn organic_status(field: OrganicField, value: f64) -> IndicatorStatus {
    match field {
        OrganicField::EngagementRate => engagement_status(value),
        _ => IndicatorStatus::Neutral,
    }
}

fn paid_status(field: PaidField, value: f64) -> IndicatorStatus {
    match field {
        PaidField::Ctr => ctr_status(value),
        _ => IndicatorStatus::Neutral,
    }
}

#[component]
fn PlatformCell(platform: Platform) -> impl IntoView {
    view! {
        <td class="metrics-table__platform">
            <span class="platform-dot" style=format!("background: {};", platform.color())></span>
            {platform.display_name()}
        </td>
    }
}

#[component]
fn OrganicTable(store: AuditStore, country: CountryId, brand: BrandId) -> impl IntoView {
    view! {
        <table class="metrics-table">
            <thead>
                <tr>
                    <th>{move || tr(store.language(), Label::Platform)}</th>
                    {OrganicField::all().into_iter().map(|field| view! {
                        <th>{move || organic_label(store.language(), field)}</th>
                    }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {Platform::all().into_iter().map(|platform| view! {
                    <tr class:metrics-table__row--inactive=move || {
                        !store.read_brand(country, brand, |e| e.metrics.get(platform).active)
                    }>
                        <PlatformCell platform=platform />
                        {OrganicField::all().into_iter().map(|field| {
                            let value = Signal::derive(move || {
                                store.read_brand(country, brand, |e| field.get(&e.metrics.get(platform).organic))
                            });
                            view! {
                                <td>
                                    <MetricInput
                                        value=value
                                        fractional=field.is_fractional()
                                        status=Signal::derive(move || organic_status(field, value.get()))
                                        on_change=move |v: f64| store.edit_brand(
                                            country,
                                            brand,
                                            BrandEdit::Platform(platform, PlatformEdit::Organic(field, v)),
                                        )
                                    />
                                </td>
                            }
                        }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn PaidTable(store: AuditStore, country: CountryId, brand: BrandId) -> impl IntoView {
    let entry_budget = move || {
        store.read_brand(country, brand, |e| {
            e.metrics.iter().map(|(_, p)| p.paid.budget).sum::<f64>()
        })
    };

    view! {
        <table class="metrics-table">
            <thead>
                <tr>
                    <th>{move || tr(store.language(), Label::Platform)}</th>
                    <th>{move || tr(store.language(), Label::AdsEnabled)}</th>
                    {PaidField::all().into_iter().map(|field| view! {
                        <th>{move || paid_label(store.language(), field)}</th>
                    }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {Platform::all().into_iter().map(|platform| {
                    let ads_enabled = move || {
                        store.read_brand(country, brand, |e| e.metrics.get(platform).paid.ads_enabled)
                    };
                    view! {
                        <tr class:metrics-table__row--inactive=move || !ads_enabled()>
                            <PlatformCell platform=platform />
                            <td>
                                <input
                                    type="checkbox"
                                    prop:checked=ads_enabled
                                    on:change=move |ev| store.edit_brand(
                                        country,
                                        brand,
                                        BrandEdit::Platform(platform, PlatformEdit::AdsEnabled(event_target_checked(&ev))),
                                    )
                                />
                            </td>
                            {PaidField::all().into_iter().map(|field| {
                                let value = Signal::derive(move || {
                                    store.read_brand(country, brand, |e| field.get(&e.metrics.get(platform).paid))
                                });
                                view! {
                                    <td>
                                        <MetricInput
                                            value=value
                                            fractional=field.is_fractional()
                                            status=Signal::derive(move || paid_status(field, value.get()))
                                            on_change=move |v: f64| store.edit_brand(
                                                country,
                                                brand,
                                                BrandEdit::Platform(platform, PlatformEdit::Paid(field, v)),
                                            )
                                        />
                                    </td>
                                }
                            }).collect_view()}
                        </tr>
                    }
                }).collect_view()}
            </tbody>
            <tfoot>
                <tr>
                    <td colspan="2">{move || tr(store.language(), Label::TotalBudget)}</td>
                    <td class="metrics-table__total">{move || ValueFormat::euro().format(entry_budget())}</td>
                    <td colspan={(PaidField::all().len() - 1).to_string()}></td>
                </tr>
            </tfoot>
        </table>
    }
}

/// Per-platform metrics of one brand entry, organic or paid.
#[component]
pub fn MetricsTable(
    store: AuditStore,
    country: CountryId,
    brand: BrandId,
    mode: RwSignal<MetricsMode>,
) -> impl IntoView {
    view! {
        <div class="table-scroll">
            {move || match mode.get() {
                MetricsMode::Organic => view! {
                    <OrganicTable store=store country=country brand=brand />
                }.into_any(),
                MetricsMode::Paid => view! {
                    <PaidTable store=store country=country brand=brand />
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rate_columns_are_coloured() {
        assert_eq!(organic_status(OrganicField::Followers, 0.5), IndicatorStatus::Neutral);
        assert_eq!(organic_status(OrganicField::EngagementRate, 0.0), IndicatorStatus::Neutral);
        assert_eq!(paid_status(PaidField::Budget, 100.0), IndicatorStatus::Neutral);
        assert_ne!(paid_status(PaidField::Ctr, 5.0), IndicatorStatus::Neutral);
    }
}
