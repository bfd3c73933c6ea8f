//! Derived Course Lists
//!
//! Memos chaining client-side filtering and weekly-course positioning.

use leptos::prelude::*;

use course_filter::{filter_courses, position_weekly_course, Course, FilterRequest, FilterState};

use crate::store::{CatalogStateStoreFields, CatalogStore};

/// Ticket counter for async work where only the latest request may apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u32);

impl Generation {
    /// Start a new request, superseding every earlier ticket
    pub fn issue(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Drop every outstanding ticket
    pub fn invalidate(&mut self) {
        self.issue();
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

/// Fetched courses narrowed by search, type, competence and bookmarks
pub fn use_filtered_courses(store: CatalogStore) -> Memo<Vec<Course>> {
    Memo::new(move |_| {
        let filters = store.filters().with(|f| f.filters().clone());
        let bookmarks = store.bookmarks().get();
        let search = filters.search.clone().unwrap_or_default();
        store.courses().with(|courses| {
            filter_courses(FilterRequest {
                courses,
                filters: &filters,
                search: &search,
                bookmarks: &bookmarks,
            })
        })
    })
}

/// `filtered` with the weekly course pinned first when the filters allow it
pub fn use_weekly_positioning(
    filtered: Memo<Vec<Course>>,
    weekly: Signal<Option<Course>>,
    filters: Signal<FilterState>,
) -> Memo<Vec<Course>> {
    Memo::new(move |_| {
        let weekly = weekly.get();
        filters.with(|filters| position_weekly_course(filtered.get(), weekly.as_ref(), filters))
    })
}
