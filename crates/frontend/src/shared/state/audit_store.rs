use crate::shared::storage::LocalStorageSlot;
use contracts::domain::a001_brand_market::{BrandEdit, BrandMarketData};
use contracts::domain::a002_recommendation::RecommendationDraft;
use contracts::enums::{BrandId, CountryId, Language};
use contracts::shared::error::TransferError;
use contracts::store::{AppState, AuditAction, StateStore};
use leptos::prelude::*;

/// Reactive handle over the single [`StateStore`].
///
/// Components read through `with` (tracked) and write through `dispatch`;
/// the store persists every transition to localStorage.
#[derive(Clone, Copy)]
pub struct AuditStore {
    inner: RwSignal<StateStore<LocalStorageSlot>>,
}

impl AuditStore {
    pub fn load() -> Self {
        Self {
            inner: RwSignal::new(StateStore::load(LocalStorageSlot)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.inner.with(|store| f(store.state()))
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.inner.with_untracked(|store| f(store.state()))
    }

    /// Tracked read of one brand entry; a missing entry reads as the default.
    pub fn read_brand<T: Default>(
        &self,
        country: CountryId,
        brand: BrandId,
        f: impl FnOnce(&BrandMarketData) -> T,
    ) -> T {
        self.with(|s| s.brand(country, brand).map(f).unwrap_or_default())
    }

    pub fn language(&self) -> Language {
        self.with(|s| s.language)
    }

    pub fn dispatch(&self, action: AuditAction) {
        self.inner.update(|store| store.dispatch(action));
    }

    pub fn edit_brand(&self, country: CountryId, brand: BrandId, edit: BrandEdit) {
        self.dispatch(AuditAction::EditBrand {
            country,
            brand,
            edit,
        });
    }

    /// Returns the new id, or `None` when the draft is incomplete.
    pub fn add_recommendation(&self, draft: RecommendationDraft) -> Option<String> {
        let mut id = None;
        self.inner
            .update(|store| id = store.add_recommendation(draft));
        id
    }

    pub fn import_document(&self, document: &str) -> Result<(), TransferError> {
        let mut result = Ok(());
        self.inner
            .update(|store| result = store.import_document(document));
        result
    }

    pub fn export_document(&self) -> Result<String, TransferError> {
        self.inner.with_untracked(|store| store.export_document())
    }
}
