//! Browser Storage
//!
//! `localStorage` adapter for bookmark persistence.

use course_filter::bookmarks::{get_bookmarks_at, toggle_bookmark as toggle_stored_bookmark, KeyValueStorage};
use course_filter::{CatalogError, CatalogResult};

pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// `None` when there is no window or storage is disabled
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok()??;
        Some(Self { inner })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> CatalogResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| CatalogError::Storage(format!("{:?}", e)))
    }
}

/// Bookmarked course ids; empty when storage is missing or corrupt
pub fn read_bookmarks(key: &str) -> Vec<String> {
    let storage = LocalStorage::open();
    get_bookmarks_at(storage.as_ref().map(|s| s as &dyn KeyValueStorage), key)
}

/// Flip a bookmark and persist it; returns the new list
pub fn toggle_bookmark(key: &str, course_id: &str) -> CatalogResult<Vec<String>> {
    let storage = LocalStorage::open().ok_or_else(|| CatalogError::Storage("localStorage unavailable".to_string()))?;
    toggle_stored_bookmark(&storage, key, course_id)
}
