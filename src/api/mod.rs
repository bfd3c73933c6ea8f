//! Directus API
//!
//! Fetches courses, competences and the weekly course from the content API.

mod competences;
mod courses;

use serde::de::DeserializeOwned;

use course_filter::models::DirectusResponse;
use course_filter::{CatalogConfig, CatalogError, CatalogResult, DirectusQuery};

pub use competences::*;
pub use courses::*;

/// `GET {api_url}/items/{collection}?{query}`, unwrapping the `data` envelope
async fn get_items<T: DeserializeOwned>(
    config: &CatalogConfig,
    collection: &str,
    query: &DirectusQuery,
) -> CatalogResult<T> {
    let mut url = config.items_url(collection);
    let query_string = query.to_query_string();
    if !query_string.is_empty() {
        url.push('?');
        url.push_str(&query_string);
    }
    log::debug!(target: "api", "GET {}", url);

    let response = reqwest::get(&url).await.map_err(|e| CatalogError::Http(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        log::warn!(target: "api", "{} answered {}", url, status);
        return Err(CatalogError::Status { status: status.as_u16(), url });
    }
    // Decoded through serde_json so malformed bodies surface as `CatalogError::Decode`
    let body = response.text().await.map_err(|e| CatalogError::Http(e.to_string()))?;
    let envelope: DirectusResponse<T> = serde_json::from_str(&body)?;
    Ok(envelope.data)
}
