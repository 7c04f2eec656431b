use crate::shared::i18n::{priority_label, scope_name, tr, Label};
use crate::shared::icons::icon;
use crate::shared::state::AuditStore;
use contracts::domain::a002_recommendation::Recommendation;
use contracts::enums::Priority;
use contracts::store::AuditAction;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

fn priority_color(priority: Priority) -> BadgeColor {
    match priority {
        Priority::High => BadgeColor::Danger,
        Priority::Medium => BadgeColor::Warning,
        Priority::Low => BadgeColor::Success,
    }
}

#[component]
fn RecommendationCard(store: AuditStore, recommendation: Recommendation) -> impl IntoView {
    let Recommendation {
        id,
        brand_id,
        country_id,
        area,
        problem,
        action,
        priority,
    } = recommendation;

    view! {
        <div class="recommendation-card" style=format!("border-left-color: {};", brand_id.accent_color())>
            <div class="recommendation-card__header">
                <div class="recommendation-card__badges">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {brand_id.display_name()}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
                        {move || scope_name(store.language(), country_id)}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Filled color=priority_color(priority)>
                        {move || priority_label(store.language(), priority)}
                    </Badge>
                </div>
                <button
                    class="recommendation-card__delete"
                    title=move || tr(store.language(), Label::Delete)
                    on:click=move |_| store.dispatch(AuditAction::RemoveRecommendation(id.clone()))
                >
                    {icon("trash")}
                </button>
            </div>
            <div class="recommendation-card__area">{area}</div>
            {(!problem.is_empty()).then(|| view! {
                <div class="recommendation-card__problem">
                    <strong>{move || tr(store.language(), Label::Problem)}": "</strong>
                    {problem.clone()}
                </div>
            })}
            <div class="recommendation-card__action">
                <strong>{move || tr(store.language(), Label::Action)}": "</strong>
                {action}
            </div>
        </div>
    }
}

/// Recommendations in insertion order.
#[component]
pub fn RecommendationList(store: AuditStore) -> impl IntoView {
    let items = move || store.with(|s| s.recommendations.clone());

    view! {
        <div class="recommendation-list">
            <Show
                when=move || store.with(|s| !s.recommendations.is_empty())
                fallback=move || view! {
                    <div class="page__empty">{move || tr(store.language(), Label::NoRecommendations)}</div>
                }
            >
                <For
                    each=items
                    key=|r| r.id.clone()
                    children=move |recommendation| view! {
                        <RecommendationCard store=store recommendation=recommendation />
                    }
                />
            </Show>
        </div>
    }
}
