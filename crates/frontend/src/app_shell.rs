//! Application shell: sidebar plus the page selected in [`AppGlobalContext`].

use crate::dashboards::d400_brand_summary::ui::BrandDashboard;
use crate::domain::a001_brand_market::ui::CountryAudit;
use crate::domain::a002_recommendation::ui::RecommendationsPage;
use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::state::AuditStore;
use leptos::prelude::*;

#[component]
pub fn AppShell(store: AuditStore) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Runs once; restores ?active= and keeps it in sync.
    ctx.init_router_integration();

    view! {
        <Shell
            store=store
            left=move || view! { <Sidebar store=store /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active.get() {
                        AppView::Dashboard => view! { <BrandDashboard store=store /> }.into_any(),
                        AppView::Country(country) => {
                            view! { <CountryAudit store=store country=country /> }.into_any()
                        }
                        AppView::Recommendations => {
                            view! { <RecommendationsPage store=store /> }.into_any()
                        }
                    }}
                }
                .into_any()
            }
        />
    }
}
