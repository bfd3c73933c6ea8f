//! Global Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

use course_filter::{Competence, Course, FilterState, FilterStore, PageAction, PageState};

use crate::storage;

/// Global catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Courses as returned by the API
    pub courses: Vec<Course>,
    /// Course of the week as returned by the API
    pub weekly_course: Option<Course>,
    /// All competences (top-level and children)
    pub competences: Vec<Competence>,
    /// Current filter selection
    pub filters: FilterStore,
    /// Bookmarked course ids
    pub bookmarks: Vec<String>,
    /// Listing page state (final ordered list, loading, errors, sidebar)
    pub page: PageState,
}

impl CatalogState {
    pub fn new(bookmarks: Vec<String>) -> Self {
        Self {
            bookmarks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the filter state wholesale
pub fn store_set_filters(store: &CatalogStore, filters: FilterState) {
    store.filters().write().set_filters(filters);
}

/// Copy the current filters, apply `change`, store the result
pub fn store_update_filters(store: &CatalogStore, change: impl FnOnce(&mut FilterState)) {
    let mut next = store.filters().read_untracked().filters().clone();
    change(&mut next);
    store_set_filters(store, next);
}

/// Directus filter object for the current selection (tracked)
pub fn store_directus_filters(store: &CatalogStore) -> Value {
    store.filters().with(|filters| filters.directus_filters())
}

/// Apply a page action
pub fn store_dispatch(store: &CatalogStore, action: PageAction) {
    store.page().write().reduce(action);
}

/// Flip a bookmark in localStorage and mirror it in the store
pub fn store_toggle_bookmark(store: &CatalogStore, bookmarks_key: &str, course_id: &str) {
    match storage::toggle_bookmark(bookmarks_key, course_id) {
        Ok(bookmarks) => *store.bookmarks().write() = bookmarks,
        Err(e) => log::error!(target: "bookmarks", "could not toggle {}: {}", course_id, e),
    }
}
