//! Course List Component
//!
//! Renders the page's final ordered course list.

use leptos::prelude::*;

use course_filter::{featured_weekly_id, has_active_filters};

use crate::components::CourseCard;
use crate::store::{store_update_filters, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn CourseList() -> impl IntoView {
    let store = use_catalog_store();

    let courses = move || store.page().with(|p| p.courses.clone());
    let featured_id = Memo::new(move |_| {
        store.filters().with(|f| {
            store.page().with(|p| {
                featured_weekly_id(&p.courses, p.weekly_course.as_ref(), f.filters()).map(str::to_string)
            })
        })
    });
    let is_empty = move || store.page().with(|p| p.first_load_done && p.courses.is_empty());
    let filtered = move || {
        store.filters().with(|f| {
            let filters = f.filters();
            has_active_filters(filters, filters.search.as_deref().unwrap_or_default())
        })
    };

    view! {
        <div class="course-list">
            <For
                each=courses
                key=|course| course.id.clone()
                children=move |course| {
                    let id = course.id.clone();
                    let weekly = Signal::derive(move || featured_id.with(|f| f.as_deref() == Some(id.as_str())));
                    view! { <CourseCard course=course weekly=weekly /> }
                }
            />
            <Show when=is_empty>
                <div class="course-list-empty">
                    {move || if filtered() {
                        view! {
                            <p>"Aucune formation ne correspond à vos filtres."</p>
                            <button on:click=move |_| store_update_filters(&store, |f| f.clear())>
                                "Réinitialiser les filtres"
                            </button>
                        }.into_any()
                    } else {
                        view! { <p>"Aucune formation disponible."</p> }.into_any()
                    }}
                </div>
            </Show>
            <p class="course-count">{move || format!("{} formations", store.page().with(|p| p.courses.len()))}</p>
        </div>
    }
}
