use contracts::enums::CountryId;
use contracts::shared::config::ACCESS_KEY_PARAM;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Page shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    Country(CountryId),
    Recommendations,
}

impl AppView {
    pub fn key(&self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::Country(country) => country.code(),
            AppView::Recommendations => "recommendations",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dashboard" => Some(AppView::Dashboard),
            "recommendations" => Some(AppView::Recommendations),
            other => CountryId::from_code(other).map(AppView::Country),
        }
    }

    pub fn all() -> Vec<AppView> {
        let mut views = vec![AppView::Dashboard];
        views.extend(CountryId::all().into_iter().map(AppView::Country));
        views.push(AppView::Recommendations);
        views
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppView>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppView::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the page from `?active=` and keep the URL in sync afterwards.
    /// Other query parameters (the access key) are carried over.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.get("active").and_then(|key| AppView::from_key(key)) {
            self.active.set(view);
        }
        let access_key = params.get(ACCESS_KEY_PARAM).cloned();

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let mut query = HashMap::from([("active".to_string(), active.key().to_string())]);
            if let Some(key) = access_key.clone() {
                query.insert(ACCESS_KEY_PARAM.to_string(), key);
            }
            let query_string = serde_qs::to_string(&query).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, view: AppView) {
        log::debug!("open view '{}'", view.key());
        self.active.set(view);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_keys_round_trip() {
        for view in AppView::all() {
            assert_eq!(AppView::from_key(view.key()), Some(view));
        }
        assert_eq!(AppView::from_key("fr"), None);
    }
}
