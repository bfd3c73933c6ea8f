//! Bookmark Persistence
//!
//! Bookmarked course ids stored as a JSON array of strings in client-local
//! storage. Reads never fail; a missing or corrupt entry is an empty set.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CatalogResult;

/// Well-known storage key for bookmarks
pub const BOOKMARKS_KEY: &str = "catalog.bookmarks";

/// String key/value storage (browser `localStorage` or an in-memory fake)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> CatalogResult<()>;
}

/// In-memory storage for tests and non-browser contexts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> CatalogResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read bookmarked ids.
///
/// `None` storage means no client-local storage exists (non-browser context).
pub fn get_bookmarks(storage: Option<&dyn KeyValueStorage>) -> Vec<String> {
    get_bookmarks_at(storage, BOOKMARKS_KEY)
}

/// [`get_bookmarks`] under a configured key
pub fn get_bookmarks_at(storage: Option<&dyn KeyValueStorage>, key: &str) -> Vec<String> {
    let Some(raw) = storage.and_then(|s| s.get_item(key)) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!(target: "bookmarks", "ignoring unreadable bookmarks: {}", e);
            Vec::new()
        }
    }
}

/// Persist `ids` (duplicates dropped, first occurrence kept)
pub fn save_bookmarks(storage: &dyn KeyValueStorage, key: &str, ids: &[String]) -> CatalogResult<()> {
    let mut unique: Vec<&String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    let raw = serde_json::to_string(&unique)?;
    storage.set_item(key, &raw).inspect_err(|e| {
        log::error!(target: "bookmarks", "failed to save bookmarks: {}", e);
    })
}

/// Add or remove `id`; returns the updated list
pub fn toggle_bookmark(storage: &dyn KeyValueStorage, key: &str, id: &str) -> CatalogResult<Vec<String>> {
    let mut ids = get_bookmarks_at(Some(storage), key);
    if let Some(pos) = ids.iter().position(|b| b == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
    save_bookmarks(storage, key, &ids)?;
    Ok(ids)
}
