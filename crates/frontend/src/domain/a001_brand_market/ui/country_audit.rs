use super::brand_section::BrandSection;
use crate::shared::dialogs::confirm;
use crate::shared::i18n::{country_name, tr, Label};
use crate::shared::icons::icon;
use crate::shared::state::AuditStore;
use contracts::enums::CountryId;
use contracts::shared::config::REFERENCE_COUNTRY;
use contracts::store::AuditAction;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonGroup, ButtonSize};

/// Which metrics table the country page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsMode {
    #[default]
    Organic,
    Paid,
}

/// Audit page of one market: every brand entry present in that country.
#[component]
pub fn CountryAudit(store: AuditStore, country: CountryId) -> impl IntoView {
    let mode = RwSignal::new(MetricsMode::default());

    let brands = move || {
        store.with(|s| {
            s.brands_in(country)
                .into_iter()
                .map(|(brand, _)| brand)
                .collect::<Vec<_>>()
        })
    };

    let on_copy = move |_| {
        let lang = store.with_untracked(|s| s.language);
        if confirm(tr(lang, Label::ConfirmCopy)) {
            store.dispatch(AuditAction::CopyFromReference { target: country });
        }
    };

    let mode_button = move |target: MetricsMode, label: Label| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=move || {
                    if mode.get() == target {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                }
                on_click=move |_| mode.set(target)
            >
                {move || tr(store.language(), label)}
            </Button>
        }
    };

    view! {
        <div class="page country-audit">
            <div class="page__header">
                <h2>
                    {icon("flag")}
                    <span>{move || country_name(store.language(), country)}</span>
                </h2>
                <div class="page__toolbar">
                    <ButtonGroup>
                        {mode_button(MetricsMode::Organic, Label::Organic)}
                        {mode_button(MetricsMode::Paid, Label::Paid)}
                    </ButtonGroup>
                    {(country != REFERENCE_COUNTRY).then(|| view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=on_copy
                        >
                            {icon("copy")}
                            " "
                            {move || tr(store.language(), Label::CopyFromReference)}
                        </Button>
                    })}
                </div>
            </div>

            <Show
                when=move || !brands().is_empty()
                fallback=move || view! {
                    <div class="page__empty">{move || tr(store.language(), Label::NoBrands)}</div>
                }
            >
                <For
                    each=brands
                    key=|brand| *brand
                    children=move |brand| view! {
                        <BrandSection store=store country=country brand=brand mode=mode />
                    }
                />
            </Show>
        </div>
    }
}
