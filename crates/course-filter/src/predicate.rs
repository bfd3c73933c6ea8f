//! Remote Filter Predicate
//!
//! Translates a [`FilterState`] into a Directus `filter` object.

use serde_json::{json, Map, Value};

use crate::filter_state::FilterState;
use crate::models::CourseType;

/// Only published courses are ever listed
pub const PUBLISHED_STATUS: &str = "published";

/// Build the Directus filter for `filters`.
///
/// The competence clause is an `_or` over both association shapes because
/// the server cannot tell which one is authoritative for a given course.
pub fn build_remote_filter_predicate(filters: &FilterState) -> Value {
    let mut predicate = Map::new();
    predicate.insert("status".to_string(), json!({ "_eq": PUBLISHED_STATUS }));

    let course_types: Vec<&str> = filters
        .course_type
        .iter()
        .filter_map(|value| CourseType::parse(value))
        .map(|kind| kind.as_str())
        .collect();
    if !course_types.is_empty() {
        predicate.insert("course_type".to_string(), json!({ "_in": course_types }));
    }

    if !filters.competences.is_empty() {
        let ids = &filters.competences;
        predicate.insert(
            "_or".to_string(),
            json!([
                { "main_competences": { "competences_id": { "id": { "_in": ids } } } },
                { "competences": { "competences_id": { "_or": [
                    { "parent_competence": { "id": { "_in": ids } } },
                    { "_and": [
                        { "parent_competence": { "_null": true } },
                        { "id": { "_in": ids } }
                    ] }
                ] } } }
            ]),
        );
    }

    Value::Object(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_only_by_default() {
        let predicate = build_remote_filter_predicate(&FilterState::default());
        assert_eq!(predicate, json!({ "status": { "_eq": "published" } }));
    }

    #[test]
    fn test_course_types_without_competences() {
        let filters = FilterState {
            course_type: vec!["Formation".to_string(), "Parcours".to_string()],
            ..Default::default()
        };
        assert_eq!(
            build_remote_filter_predicate(&filters),
            json!({
                "status": { "_eq": "published" },
                "course_type": { "_in": ["Formation", "Parcours"] }
            })
        );
    }

    #[test]
    fn test_unrecognised_types_are_dropped() {
        let filters = FilterState {
            course_type: vec!["Webinar".to_string(), "Parcours".to_string()],
            ..Default::default()
        };
        let predicate = build_remote_filter_predicate(&filters);
        assert_eq!(predicate["course_type"], json!({ "_in": ["Parcours"] }));

        let only_invalid = FilterState {
            course_type: vec!["Webinar".to_string()],
            ..Default::default()
        };
        assert!(build_remote_filter_predicate(&only_invalid).get("course_type").is_none());
    }

    #[test]
    fn test_competence_clause_covers_both_shapes() {
        let filters = FilterState {
            competences: vec!["4".to_string()],
            ..Default::default()
        };
        let predicate = build_remote_filter_predicate(&filters);
        assert_eq!(
            predicate["_or"],
            json!([
                { "main_competences": { "competences_id": { "id": { "_in": ["4"] } } } },
                { "competences": { "competences_id": { "_or": [
                    { "parent_competence": { "id": { "_in": ["4"] } } },
                    { "_and": [
                        { "parent_competence": { "_null": true } },
                        { "id": { "_in": ["4"] } }
                    ] }
                ] } } }
            ])
        );
        assert!(predicate.get("course_type").is_none());
    }
}
