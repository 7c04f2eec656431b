//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the page title, the interface language
//! selector and the data actions (import, export, clear).

use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::dialogs::{alert, confirm};
use crate::shared::export::download_json;
use crate::shared::file_reader::{read_text, selected_file};
use crate::shared::i18n::{country_name, tr, Label};
use crate::shared::icons::icon;
use crate::shared::state::AuditStore;
use contracts::enums::Language;
use contracts::store::AuditAction;
use contracts::usecases::u501_state_transfer::export_file_name;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader(store: AuditStore) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let page_title = move || {
        let lang = store.language();
        match ctx.active.get() {
            AppView::Dashboard => tr(lang, Label::Dashboard),
            AppView::Country(country) => country_name(lang, country),
            AppView::Recommendations => tr(lang, Label::Recommendations),
        }
    };

    let on_language = move |ev: web_sys::Event| {
        if let Some(lang) = Language::from_code(&event_target_value(&ev)) {
            store.dispatch(AuditAction::SetLanguage(lang));
        }
    };

    let on_import = move |ev: web_sys::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            let lang = store.with_untracked(|s| s.language);
            let outcome = match read_text(file).await {
                Ok(text) => store.import_document(&text).map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => {
                    log::info!("audit document imported");
                    alert(tr(store.with_untracked(|s| s.language), Label::ImportDone));
                }
                Err(e) => {
                    log::warn!("import rejected: {}", e);
                    alert(&format!("{}: {}", tr(lang, Label::ImportFailed), e));
                }
            }
        });
    };

    let on_export = move |_| {
        let lang = store.with_untracked(|s| s.language);
        let file_name = export_file_name(chrono::Utc::now().date_naive());
        let result = store
            .export_document()
            .map_err(|e| e.to_string())
            .and_then(|document| download_json(&document, &file_name));
        match result {
            Ok(()) => log::info!("exported {}", file_name),
            Err(e) => {
                log::error!("export failed: {}", e);
                alert(&format!("{}: {}", tr(lang, Label::ExportFailed), e));
            }
        }
    };

    let on_clear = move |_| {
        let lang = store.with_untracked(|s| s.language);
        if confirm(tr(lang, Label::ConfirmClear)) {
            store.dispatch(AuditAction::Reset);
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">{move || tr(store.language(), Label::AppTitle)}</span>
                <span class="top-header__page">{page_title}</span>
            </div>

            <div class="top-header__actions">
                <select class="top-header__select" on:change=on_language>
                    {Language::all().into_iter().map(|lang| view! {
                        <option value=lang.code() selected=move || store.language() == lang>
                            {lang.display_name()}
                        </option>
                    }).collect_view()}
                </select>

                <label class="top-header__action" for="audit-import-input">
                    {icon("upload")}
                    <span>{move || tr(store.language(), Label::Import)}</span>
                </label>
                <input
                    id="audit-import-input"
                    type="file"
                    accept=".json,application/json"
                    class="hidden"
                    on:change=on_import
                />

                <button class="top-header__action" on:click=on_export>
                    {icon("download")}
                    <span>{move || tr(store.language(), Label::Export)}</span>
                </button>

                <button class="top-header__action top-header__action--danger" on:click=on_clear>
                    {icon("trash")}
                    <span>{move || tr(store.language(), Label::Clear)}</span>
                </button>
            </div>
        </div>
    }
}
