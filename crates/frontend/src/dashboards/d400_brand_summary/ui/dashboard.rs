use super::brand_panel::BrandPanel;
use super::general_info::GeneralInfoCard;
use crate::shared::state::AuditStore;
use contracts::enums::BrandId;
use leptos::prelude::*;

/// Cross-market view: project info, then one panel per tracked brand.
#[component]
pub fn BrandDashboard(store: AuditStore) -> impl IntoView {
    view! {
        <div class="page dashboard">
            <GeneralInfoCard store=store />
            {BrandId::tracked().into_iter().map(|brand| view! {
                <BrandPanel store=store brand=brand />
            }).collect_view()}
        </div>
    }
}
