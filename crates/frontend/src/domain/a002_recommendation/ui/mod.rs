mod form;
mod list;

use crate::shared::i18n::{tr, Label};
use crate::shared::icons::icon;
use crate::shared::state::AuditStore;
use form::RecommendationForm;
use leptos::prelude::*;
use list::RecommendationList;

#[component]
pub fn RecommendationsPage(store: AuditStore) -> impl IntoView {
    view! {
        <div class="page recommendations">
            <div class="page__header">
                <h2>
                    {icon("lightbulb")}
                    <span>{move || tr(store.language(), Label::Recommendations)}</span>
                </h2>
            </div>
            <div class="recommendations__layout">
                <RecommendationForm store=store />
                <RecommendationList store=store />
            </div>
        </div>
    }
}
