//! Bookmark Button Component
//!
//! Star toggle persisting the course id in localStorage.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_toggle_bookmark, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn BookmarkButton(#[prop(into)] course_id: String) -> impl IntoView {
    let store = use_catalog_store();
    let ctx = use_app_context();
    let id = StoredValue::new(course_id);

    let is_bookmarked = move || id.with_value(|id| store.bookmarks().with(|b| b.contains(id)));

    view! {
        <button
            class=move || if is_bookmarked() { "bookmark-btn active" } else { "bookmark-btn" }
            title=move || if is_bookmarked() { "Retirer des favoris" } else { "Ajouter aux favoris" }
            on:click=move |ev| {
                ev.stop_propagation();
                id.with_value(|id| store_toggle_bookmark(&store, &ctx.bookmarks_key(), id));
            }
        >
            {move || if is_bookmarked() { "★" } else { "☆" }}
        </button>
    }
}
