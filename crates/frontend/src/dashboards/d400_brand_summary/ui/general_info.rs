use crate::shared::i18n::{tr, Label};
use crate::shared::state::AuditStore;
use contracts::store::{AuditAction, GeneralInfoField};
use leptos::prelude::*;

#[component]
pub fn GeneralInfoCard(store: AuditStore) -> impl IntoView {
    let set = move |field: GeneralInfoField, value: String| {
        store.dispatch(AuditAction::SetGeneralInfo(field, value))
    };
    let text = move |label: Label| move || tr(store.language(), label);

    view! {
        <div class="general-info form-grid">
            <div class="form-group">
                <label>{text(Label::ProjectName)}</label>
                <input
                    type="text"
                    prop:value=move || store.with(|s| s.general_info.project_name.clone())
                    on:input=move |ev| set(GeneralInfoField::ProjectName, event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>{text(Label::Date)}</label>
                <input
                    type="date"
                    prop:value=move || store.with(|s| s.general_info.date.clone())
                    on:change=move |ev| set(GeneralInfoField::Date, event_target_value(&ev))
                />
            </div>
            <div class="form-group form-group--wide">
                <label>{text(Label::Objectives)}</label>
                <textarea
                    rows="2"
                    prop:value=move || store.with(|s| s.general_info.objectives.clone())
                    on:input=move |ev| set(GeneralInfoField::Objectives, event_target_value(&ev))
                />
            </div>
        </div>
    }
}
