//! Filter Sidebar Component
//!
//! Course type, competence, bookmark and completion filters.

use leptos::prelude::*;

use course_filter::{has_active_filters, PageAction};

use crate::components::{CompetenceFilter, TypeSelector};
use crate::store::{store_dispatch, store_update_filters, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn FilterSidebar() -> impl IntoView {
    let store = use_catalog_store();

    let is_open = move || store.page().with(|p| p.sidebar_open);
    let show_bookmarked = move || store.filters().with(|f| f.filters().show_bookmarked);
    let hide_completed = move || store.filters().with(|f| f.filters().hide_completed);
    let any_active = move || {
        store.filters().with(|f| {
            let filters = f.filters();
            has_active_filters(filters, filters.search.as_deref().unwrap_or_default())
        })
    };

    view! {
        <aside class=move || if is_open() { "filter-sidebar open" } else { "filter-sidebar" }>
            <div class="filter-sidebar-header">
                <span>"Filtres"</span>
                <button
                    class="sidebar-close-btn"
                    on:click=move |_| store_dispatch(&store, PageAction::SetSidebarOpen(false))
                >
                    "×"
                </button>
            </div>

            <TypeSelector />

            <CompetenceFilter />

            <label class="filter-toggle">
                <input
                    type="checkbox"
                    prop:checked=show_bookmarked
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        store_update_filters(&store, |f| f.show_bookmarked = checked);
                    }
                />
                "Mes favoris uniquement"
            </label>

            <label class="filter-toggle">
                <input
                    type="checkbox"
                    prop:checked=hide_completed
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        store_update_filters(&store, |f| f.hide_completed = checked);
                    }
                />
                "Masquer les formations terminées"
            </label>

            <Show when=any_active>
                <button
                    class="filter-clear-btn"
                    on:click=move |_| store_update_filters(&store, |f| f.clear())
                >
                    "Effacer les filtres"
                </button>
            </Show>
        </aside>
    }
}
