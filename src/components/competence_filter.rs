//! Competence Filter Component
//!
//! Top-level competences with colour dot and course count.

use leptos::prelude::*;

use course_filter::count_courses_by_competence;

use crate::context::use_app_context;
use crate::store::{store_update_filters, use_catalog_store, CatalogStateStoreFields};

/// One row per top-level competence
#[component]
fn CompetenceRow(id: String, label: String, color: String, count: Signal<usize>) -> impl IntoView {
    let store = use_catalog_store();
    let row_id = id.clone();
    let is_selected = move || store.filters().with(|f| f.filters().competences.contains(&row_id));

    view! {
        <button
            class=move || if is_selected() { "competence-row selected" } else { "competence-row" }
            on:click=move |_| store_update_filters(&store, |f| f.toggle_competence(&id))
        >
            <span class="competence-color-dot" style=format!("background-color: {};", color)></span>
            <span class="competence-name">{label}</span>
            <span class="competence-count">{move || count.get()}</span>
        </button>
    }
}

/// Competence list for the sidebar
#[component]
pub fn CompetenceFilter() -> impl IntoView {
    let store = use_catalog_store();
    let ctx = use_app_context();

    // Counts over fetched courses, not the filtered list
    let counts = Memo::new(move |_| store.courses().with(|courses| count_courses_by_competence(courses)));

    let top_level = move || {
        store
            .competences()
            .get()
            .into_iter()
            .filter(|c| c.is_top_level() && c.id.is_some())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="competence-filter">
            <div class="sidebar-section-title">"Compétences"</div>
            <For
                each=top_level
                key=|competence| competence.id.clone()
                children=move |competence| {
                    let id = competence.id.clone().unwrap_or_default();
                    let label = competence.label(&ctx.locale()).to_string();
                    let color = competence.colors().map(|c| c.light).unwrap_or_else(|| "#666".to_string());
                    let count_id = id.clone();
                    let count = Signal::derive(move || counts.with(|m| m.get(&count_id).copied().unwrap_or(0)));
                    view! { <CompetenceRow id=id label=label color=color count=count /> }
                }
            />
        </div>
    }
}
