//! Page Status Component
//!
//! Loading indicator and the two error presentations.

use leptos::prelude::*;

use course_filter::{PageAction, PageError};

use crate::context::use_app_context;
use crate::store::{store_dispatch, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn PageStatus() -> impl IntoView {
    let store = use_catalog_store();
    let ctx = use_app_context();

    let loading = move || store.page().with(|p| p.loading && !p.first_load_done);
    let error = move || store.page().with(|p| p.error.clone());

    let retry = move |_: web_sys::MouseEvent| {
        store_dispatch(&store, PageAction::ClearErrors);
        ctx.reload();
    };

    view! {
        <Show when=loading>
            <div class="page-loading">"Chargement..."</div>
        </Show>
        {move || match error() {
            PageError::None => view! { <div></div> }.into_any(),
            PageError::ApiFailure => view! {
                <div class="page-error api-failure">
                    <p>"Le catalogue est momentanément indisponible."</p>
                    <button on:click=retry>"Réessayer"</button>
                </div>
            }.into_any(),
            PageError::Generic(message) => view! {
                <div class="page-error">
                    <p>"Une erreur est survenue : " {message}</p>
                    <button on:click=move |_| store_dispatch(&store, PageAction::ClearErrors)>"×"</button>
                </div>
            }.into_any(),
        }}
    }
}
