use crate::shared::error::StorageError;
use std::sync::Mutex;

/// Durable slot holding the serialized state document.
///
/// Written after every change, read once at startup.
pub trait StateStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, document: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-local slot for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(document.into())),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn save(&self, document: &str) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        *slot = Some(document.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}
