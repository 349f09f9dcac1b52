use vessel_core::{DyeStore, MemoryStore, StorageError};
use web_sys as web;

/// `localStorage`-backed dye store.
pub struct LocalDyeStore {
    storage: web::Storage,
}

impl DyeStore for LocalDyeStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, blob)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// `localStorage` when the browser allows it, otherwise an in-memory store.
pub fn open_dye_store(window: &web::Window) -> Box<dyn DyeStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Box::new(LocalDyeStore { storage }),
        _ => {
            log::warn!("[storage] localStorage unavailable; dye state will not survive reloads");
            Box::new(MemoryStore::default())
        }
    }
}
