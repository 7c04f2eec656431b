use super::action::AuditAction;
use super::app_state::AppState;
use super::reducer::reduce;
use super::storage::StateStorage;
use crate::domain::a002_recommendation::RecommendationDraft;
use crate::shared::error::TransferError;
use crate::usecases::u501_state_transfer::{export_state, import_state};

/// Owner of the application state and its storage slot.
///
/// `dispatch` is the single update entry point; every transition is persisted
/// right after it is applied.
#[derive(Debug)]
pub struct StateStore<S> {
    state: AppState,
    storage: S,
}

impl<S: StateStorage> StateStore<S> {
    /// Read the slot once. A missing or unreadable document yields the
    /// built-in default.
    pub fn load(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(document)) => match serde_json::from_str::<AppState>(&document) {
                Ok(mut state) => {
                    state.normalize();
                    log::debug!("restored persisted state ({} bytes)", document.len());
                    state
                }
                Err(e) => {
                    log::warn!("persisted state unreadable, starting fresh: {}", e);
                    AppState::default()
                }
            },
            Ok(None) => AppState::default(),
            Err(e) => {
                log::warn!("{}", e);
                AppState::default()
            }
        };
        Self { state, storage }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn dispatch(&mut self, action: AuditAction) {
        log::debug!("dispatch {}", action.name());
        let is_reset = matches!(action, AuditAction::Reset);
        self.state = reduce(&self.state, action);

        if is_reset {
            if let Err(e) = self.storage.clear() {
                log::error!("{}", e);
            }
        } else {
            self.persist();
        }
    }

    /// Append a recommendation built from the draft. Returns the new id, or
    /// `None` when the draft lacks an area or an action.
    pub fn add_recommendation(&mut self, draft: RecommendationDraft) -> Option<String> {
        if !draft.is_complete() {
            return None;
        }
        let recommendation = draft.into_recommendation();
        let id = recommendation.id.clone();
        self.dispatch(AuditAction::AddRecommendation(recommendation));
        Some(id)
    }

    /// Replace the whole state with an imported document. On error the
    /// current state is kept as is.
    pub fn import_document(&mut self, document: &str) -> Result<(), TransferError> {
        let imported = import_state(document)?;
        self.dispatch(AuditAction::Replace(imported));
        Ok(())
    }

    pub fn export_document(&self) -> Result<String, TransferError> {
        export_state(&self.state)
    }

    fn persist(&self) {
        match serde_json::to_string(&self.state) {
            Ok(document) => {
                if let Err(e) = self.storage.save(&document) {
                    log::error!("{}", e);
                }
            }
            Err(e) => log::error!("failed to serialize state: {}", e),
        }
    }
}
