//! Competence Requests

use course_filter::query::COMPETENCE_FIELDS;
use course_filter::{CatalogConfig, CatalogResult, Competence, DirectusQuery};

use super::get_items;

/// Every competence, top-level and sub-competences alike
pub async fn list_competences(config: &CatalogConfig) -> CatalogResult<Vec<Competence>> {
    let query = DirectusQuery::new().fields(COMPETENCE_FIELDS).sort("sort");
    get_items(config, "competences", &query).await
}
