use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::state::AuditStore;
use crate::system::access_gate::{is_access_granted_here, AccessDenied};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    if !is_access_granted_here() {
        return view! { <AccessDenied /> }.into_any();
    }

    // Navigation state for the whole app.
    provide_context(AppGlobalContext::new());

    let store = AuditStore::load();

    view! {
        <ConfigProvider>
            <AppShell store=store />
        </ConfigProvider>
    }
    .into_any()
}
