//! Private-demo gate.
//!
//! The build may embed an access key (`AUDIT_ACCESS_KEY`); the page then
//! renders only when the URL carries the same value in `?key=`.

use crate::shared::i18n::{tr, Label};
use crate::shared::icons::icon;
use contracts::enums::Language;
use contracts::shared::access::is_access_granted;
use contracts::shared::config::{ACCESS_KEY_ENV, ACCESS_KEY_PARAM};
use leptos::prelude::*;
use std::collections::HashMap;

/// Key embedded at build time
const EMBEDDED_KEY: Option<&str> = option_env!("AUDIT_ACCESS_KEY");

fn provided_key() -> Option<String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(ACCESS_KEY_PARAM).cloned()
}

/// Whether the current page URL passes the gate
pub fn is_access_granted_here() -> bool {
    let provided = provided_key();
    let granted = is_access_granted(EMBEDDED_KEY, provided.as_deref());
    if !granted {
        log::warn!("{} is set and the URL key does not match", ACCESS_KEY_ENV);
    }
    granted
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    let lang = Language::default();

    view! {
        <div class="access-denied">
            <div class="access-denied__box">
                {icon("lock")}
                <h1>{tr(lang, Label::AccessDenied)}</h1>
                <p>{tr(lang, Label::AccessDeniedHint)}</p>
                <p class="access-denied__secondary">{tr(Language::En, Label::AccessDeniedHint)}</p>
            </div>
        </div>
    }
}
