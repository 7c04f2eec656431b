//! localStorage slot for the persisted audit document.

use contracts::shared::config::STORAGE_KEY;
use contracts::shared::error::StorageError;
use contracts::store::StateStorage;
use web_sys::Storage;

fn local_storage() -> Result<Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

/// The browser slot under [`STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

impl StateStorage for LocalStorageSlot {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn save(&self, document: &str) -> Result<(), StorageError> {
        // Quota errors surface here.
        local_storage()?
            .set_item(STORAGE_KEY, document)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(STORAGE_KEY)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
