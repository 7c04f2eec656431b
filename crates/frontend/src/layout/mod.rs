pub mod global_context;
pub mod left;
pub mod top_header;

use crate::shared::state::AuditStore;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(store: AuditStore, left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader store=store />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main" data-zone="center">
                    {center()}
                </div>
            </div>
        </div>
    }
}
