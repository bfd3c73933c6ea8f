//! Search Bar Component
//!
//! Free-text search, debounced before it reaches the filter state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::hooks::Generation;
use crate::store::{store_update_filters, use_catalog_store};

/// Delay between the last keystroke and filtering
const SEARCH_DEBOUNCE_MS: u32 = 250;

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_catalog_store();
    let (text, set_text) = signal(String::new());
    // Only the latest keystroke's timer may apply its value
    let generation = StoredValue::new(Generation::default());

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_text.set(value.clone());
        let ticket = generation.try_update_value(Generation::issue).unwrap_or_default();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.with_value(|g| g.is_current(ticket)) {
                store_update_filters(&store, |f| f.set_search(&value));
            }
        });
    };

    let on_clear = move |_: web_sys::MouseEvent| {
        generation.update_value(Generation::invalidate);
        set_text.set(String::new());
        store_update_filters(&store, |f| f.set_search(""));
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Rechercher une formation..."
                prop:value=move || text.get()
                on:input=on_input
            />
            <Show when=move || !text.get().is_empty()>
                <button class="search-clear-btn" on:click=on_clear>"×"</button>
            </Show>
        </div>
    }
}
