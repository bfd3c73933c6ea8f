//! Type Selector Component
//!
//! Course type toggle buttons.

use leptos::prelude::*;

use course_filter::CourseType;

use crate::store::{store_update_filters, use_catalog_store, CatalogStateStoreFields};

/// Course type options (value, label)
pub const COURSE_TYPES: &[(CourseType, &str)] = &[
    (CourseType::Formation, "Formations"),
    (CourseType::Parcours, "Parcours"),
];

/// Toggle buttons, one per course type
#[component]
pub fn TypeSelector() -> impl IntoView {
    let store = use_catalog_store();

    view! {
        <div class="type-selector">
            {COURSE_TYPES.iter().map(|(kind, label)| {
                let value = kind.as_str();
                let is_selected = move || {
                    store.filters().with(|f| f.filters().course_type.iter().any(|v| v == value))
                };
                view! {
                    <button
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| store_update_filters(&store, |f| f.toggle_course_type(value))
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
