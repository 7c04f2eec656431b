use crate::shared::i18n::{priority_label, scope_name, tr, Label};
use crate::shared::state::AuditStore;
use contracts::domain::a002_recommendation::{RecommendationDraft, RecommendationScope};
use contracts::enums::{BrandId, Priority};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Brands a recommendation can be tagged with, `Other` included.
fn brand_choices() -> Vec<BrandId> {
    BrandId::all()
}

/// Draft form. Area and action are required; after a successful add the
/// text fields are cleared and brand, market and priority are kept.
#[component]
pub fn RecommendationForm(store: AuditStore) -> impl IntoView {
    let draft = RwSignal::new(RecommendationDraft::default());
    let show_error = RwSignal::new(false);
    let text = move |label: Label| move || tr(store.language(), label);

    let on_submit = move |_| match store.add_recommendation(draft.get_untracked()) {
        Some(id) => {
            log::info!("recommendation {} added", id);
            draft.update(|d| {
                d.area.clear();
                d.problem.clear();
                d.action.clear();
            });
            show_error.set(false);
        }
        None => show_error.set(true),
    };

    view! {
        <div class="recommendation-form">
            <h3>{text(Label::NewRecommendation)}</h3>

            <div class="form-grid">
                <div class="form-group">
                    <label>{text(Label::Brand)}</label>
                    <select on:change=move |ev| {
                        if let Some(brand) = BrandId::from_code(&event_target_value(&ev)) {
                            draft.update(|d| d.brand_id = brand);
                        }
                    }>
                        {brand_choices().into_iter().map(|brand| view! {
                            <option value=brand.code() selected=move || draft.with(|d| d.brand_id == brand)>
                                {brand.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{text(Label::Scope)}</label>
                    <select on:change=move |ev| {
                        if let Some(scope) = RecommendationScope::from_code(&event_target_value(&ev)) {
                            draft.update(|d| d.country_id = scope);
                        }
                    }>
                        {RecommendationScope::all().into_iter().map(|scope| view! {
                            <option value=scope.code() selected=move || draft.with(|d| d.country_id == scope)>
                                {move || scope_name(store.language(), scope)}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{text(Label::Priority)}</label>
                    <select on:change=move |ev| {
                        if let Some(priority) = Priority::from_code(&event_target_value(&ev)) {
                            draft.update(|d| d.priority = priority);
                        }
                    }>
                        {Priority::all().into_iter().map(|priority| view! {
                            <option value=priority.code() selected=move || draft.with(|d| d.priority == priority)>
                                {move || priority_label(store.language(), priority)}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{text(Label::Area)}" *"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.area.clone())
                        on:input=move |ev| draft.update(|d| d.area = event_target_value(&ev))
                    />
                </div>

                <div class="form-group form-group--wide">
                    <label>{text(Label::Problem)}</label>
                    <textarea
                        rows="2"
                        prop:value=move || draft.with(|d| d.problem.clone())
                        on:input=move |ev| draft.update(|d| d.problem = event_target_value(&ev))
                    />
                </div>

                <div class="form-group form-group--wide">
                    <label>{text(Label::Action)}" *"</label>
                    <textarea
                        rows="2"
                        prop:value=move || draft.with(|d| d.action.clone())
                        on:input=move |ev| draft.update(|d| d.action = event_target_value(&ev))
                    />
                </div>
            </div>

            <Show when=move || show_error.get()>
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{text(Label::DraftIncomplete)}</span>
                </div>
            </Show>

            <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                {text(Label::Add)}
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_selector_offers_other() {
        let choices = brand_choices();
        assert!(choices.contains(&BrandId::Other));
        assert!(choices.contains(&BrandId::Resound));
        assert!(choices.contains(&BrandId::Beltone));
        assert!(BrandId::from_code(BrandId::Other.code()) == Some(BrandId::Other));
    }
}
