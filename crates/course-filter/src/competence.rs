//! Competence Matcher
//!
//! Resolves course-competence associations to top-level competence ids and
//! tests courses against a competence selection.

use std::collections::HashMap;

use crate::models::{CompetenceLink, Course, ParentRef};

/// Effective top-level competence id of a single association.
///
/// Main associations point straight at a top-level competence. Legacy ones
/// resolve through the parent; the competence's own id is only used when its
/// parent is known to be null. An unloaded parent does not resolve.
pub fn extract_effective_competence_id(link: &CompetenceLink, uses_main_shape: bool) -> Option<String> {
    let target = link.competences_id.as_ref()?;
    if uses_main_shape {
        return target.id.clone();
    }
    match &target.parent_competence {
        ParentRef::Parent(parent_id) => Some(parent_id.clone()),
        ParentRef::TopLevel => target.id.clone(),
        ParentRef::Unknown => None,
    }
}

/// Whether `course` belongs to any of `selected_ids` (empty selection matches everything)
pub fn matches_filter(course: &Course, selected_ids: &[String]) -> bool {
    if selected_ids.is_empty() {
        return true;
    }
    let associations = course.associations();
    let uses_main = associations.uses_main_shape();
    associations.links().iter().any(|link| {
        extract_effective_competence_id(link, uses_main).is_some_and(|id| selected_ids.contains(&id))
    })
}

/// Resolved competence ids of a course, de-duplicated in first-seen order
pub fn collect_competence_ids(course: &Course) -> Vec<String> {
    let associations = course.associations();
    let uses_main = associations.uses_main_shape();
    let mut ids: Vec<String> = Vec::new();
    for link in associations.links() {
        if let Some(id) = extract_effective_competence_id(link, uses_main) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Number of courses per top-level competence; a course counts once per competence
pub fn count_courses_by_competence(courses: &[Course]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for course in courses {
        for id in collect_competence_ids(course) {
            *counts.entry(id).or_default() += 1;
        }
    }
    counts
}
