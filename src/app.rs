//! Course Catalog App
//!
//! Listing page: filter sidebar, search, course list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use course_filter::{PageAction, PageState, PageStatePatch};

use crate::api;
use crate::components::{CourseList, FilterSidebar, PageStatus, SearchBar};
use crate::config::load_config;
use crate::context::{use_app_context, AppContext};
use crate::hooks::{use_filtered_courses, use_weekly_positioning, Generation};
use crate::storage;
use crate::store::{store_directus_filters, store_dispatch, use_catalog_store, CatalogState, CatalogStateStoreFields};

/// Viewport width from which the sidebar starts open
const WIDE_SCREEN_PX: f64 = 1024.0;

fn is_wide_screen() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .is_some_and(|width| width >= WIDE_SCREEN_PX)
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    let mut state = CatalogState::new(storage::read_bookmarks(&config.bookmarks_key));
    state.page = PageState::with_patch(PageStatePatch {
        sidebar_open: Some(is_wide_screen()),
        ..Default::default()
    });
    provide_context(Store::new(state));

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), config));

    view! { <CatalogPage /> }
}

#[component]
fn CatalogPage() -> impl IntoView {
    let store = use_catalog_store();
    let ctx = use_app_context();

    // Search text does not change the remote filter, so typing never refetches
    let directus_filter = Memo::new(move |_| store_directus_filters(&store));

    // Load competences and the weekly course on mount / reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let config = ctx.config();
        log::debug!(target: "app", "loading competences and weekly course, trigger={}", trigger);
        spawn_local(async move {
            match api::list_competences(&config).await {
                Ok(competences) => *store.competences().write() = competences,
                Err(e) => log::warn!(target: "app", "competences unavailable: {}", e),
            }
            match api::get_weekly_course(&config).await {
                Ok(weekly) => *store.weekly_course().write() = weekly,
                Err(e) => log::warn!(target: "app", "weekly course unavailable: {}", e),
            }
        });
    });

    // Load courses when the remote filter or trigger changes.
    // Only the latest request may write its result.
    let fetch_generation = StoredValue::new(Generation::default());
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let filter = directus_filter.get();
        let config = ctx.config();
        let ticket = fetch_generation.try_update_value(Generation::issue).unwrap_or_default();
        store_dispatch(&store, PageAction::SetLoading(true));
        spawn_local(async move {
            let result = api::list_courses(&config, filter).await;
            if !fetch_generation.with_value(|g| g.is_current(ticket)) {
                log::debug!(target: "app", "dropping stale course response, ticket={}", ticket);
                return;
            }
            match result {
                Ok(courses) => {
                    *store.courses().write() = courses;
                    store_dispatch(&store, PageAction::ClearErrors);
                }
                Err(e) => {
                    log::error!(target: "app", "failed to load courses: {}", e);
                    let action = if e.is_api_failure() {
                        PageAction::SetApiFailure(true)
                    } else {
                        PageAction::SetError(Some(e.to_string()))
                    };
                    store_dispatch(&store, action);
                }
            }
            store_dispatch(&store, PageAction::SetLoading(false));
            store_dispatch(&store, PageAction::SetFirstLoadDone(true));
        });
    });

    // Filter -> weekly positioning -> page state
    let filtered = use_filtered_courses(store);
    let weekly = Signal::derive(move || store.weekly_course().get());
    let filters = Signal::derive(move || store.filters().with(|f| f.filters().clone()));
    let positioned = use_weekly_positioning(filtered, weekly, filters);

    Effect::new(move |_| {
        let courses = positioned.get();
        let weekly = weekly.get();
        store_dispatch(&store, PageAction::SetCourses(courses));
        store_dispatch(&store, PageAction::SetWeeklyCourse(weekly));
    });

    view! {
        <div class="catalog-layout">
            <FilterSidebar />

            <main class="catalog-main">
                <header class="catalog-header">
                    <button
                        class="sidebar-toggle-btn"
                        on:click=move |_| store_dispatch(&store, PageAction::ToggleSidebar)
                    >
                        "Filtres"
                    </button>
                    <SearchBar />
                </header>

                <PageStatus />

                <CourseList />
            </main>
        </div>
    }
}
