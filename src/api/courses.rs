//! Course Requests

use serde_json::Value;

use course_filter::models::WeeklyCourse;
use course_filter::query::COURSE_FIELDS;
use course_filter::{CatalogConfig, CatalogResult, Course, DirectusQuery};

use super::get_items;

/// Published courses matching the Directus `filter`
pub async fn list_courses(config: &CatalogConfig, filter: Value) -> CatalogResult<Vec<Course>> {
    let query = DirectusQuery::new()
        .fields(COURSE_FIELDS)
        .filter(filter)
        .limit(config.page_size)
        .sort("-date_created");
    let courses: Vec<Course> = get_items(config, "courses", &query).await?;
    log::info!(target: "api", "loaded {} courses", courses.len());
    Ok(courses)
}

/// Course of the week; `None` when the singleton is empty
pub async fn get_weekly_course(config: &CatalogConfig) -> CatalogResult<Option<Course>> {
    let query = DirectusQuery::new().nested_fields("course", COURSE_FIELDS);
    let weekly: Option<WeeklyCourse> = get_items(config, "weekly_course", &query).await?;
    Ok(weekly.and_then(|w| w.course))
}
