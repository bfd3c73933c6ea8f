//! Course Filter Service
//!
//! Client-side narrowing of an already-fetched course list.

use crate::competence::matches_filter;
use crate::filter_state::FilterState;
use crate::models::Course;

/// Inputs of [`filter_courses`]
#[derive(Debug, Clone, Copy)]
pub struct FilterRequest<'a> {
    pub courses: &'a [Course],
    pub filters: &'a FilterState,
    pub search: &'a str,
    pub bookmarks: &'a [String],
}

/// Apply search, type, competence and bookmark filters in that order.
///
/// Each stage only removes courses; relative order is preserved.
/// `hide_completed` is accepted but has no effect until progress tracking exists.
pub fn filter_courses(request: FilterRequest<'_>) -> Vec<Course> {
    let FilterRequest { courses, filters, search, bookmarks } = request;
    let needle = search.trim().to_lowercase();

    let filtered: Vec<Course> = courses
        .iter()
        .filter(|course| needle.is_empty() || matches_search(course, &needle))
        .filter(|course| filters.course_type.is_empty() || matches_course_type(course, &filters.course_type))
        .filter(|course| filters.competences.is_empty() || matches_filter(course, &filters.competences))
        .filter(|course| !filters.show_bookmarked || bookmarks.contains(&course.id))
        .cloned()
        .collect();

    log::debug!(target: "filters", "filtered {} courses down to {}", courses.len(), filtered.len());
    filtered
}

/// Case-insensitive substring match over every translation (not only the current locale)
fn matches_search(course: &Course, needle: &str) -> bool {
    course.translations.iter().any(|t| {
        [&t.title, &t.description, &t.subtitle]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(needle))
    })
}

fn matches_course_type(course: &Course, selected: &[String]) -> bool {
    course
        .kind()
        .is_some_and(|kind| selected.iter().any(|value| value == kind.as_str()))
}

/// Whether any search text or filter dimension is set
pub fn has_active_filters(filters: &FilterState, search: &str) -> bool {
    !search.trim().is_empty()
        || !filters.course_type.is_empty()
        || !filters.competences.is_empty()
        || filters.show_bookmarked
        || filters.hide_completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Competence, CompetenceLink, CourseTranslation, CourseType, ParentRef};

    fn make_course(id: &str, kind: Option<CourseType>, title: &str) -> Course {
        let mut course = Course::new(id, kind);
        course.translations = vec![CourseTranslation {
            languages_code: "fr".to_string(),
            title: Some(title.to_string()),
            ..Default::default()
        }];
        course
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    fn run(courses: &[Course], filters: &FilterState, search: &str, bookmarks: &[String]) -> Vec<Course> {
        filter_courses(FilterRequest { courses, filters, search, bookmarks })
    }

    #[test]
    fn test_identity_without_filters() {
        let courses = vec![
            make_course("1", Some(CourseType::Formation), "A"),
            make_course("2", None, "B"),
            Course::new("3", Some(CourseType::Parcours)),
        ];
        let filters = FilterState::default();
        assert_eq!(run(&courses, &filters, "", &[]), courses);
        assert!(!has_active_filters(&filters, "   "));
    }

    #[test]
    fn test_filter_by_course_type() {
        let courses = vec![
            Course::new("1", Some(CourseType::Formation)),
            Course::new("2", Some(CourseType::Parcours)),
        ];
        let filters = FilterState {
            course_type: vec!["Formation".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&run(&courses, &filters, "", &[])), vec!["1"]);
    }

    #[test]
    fn test_unknown_course_type_never_matches() {
        let mut odd = Course::new("1", None);
        odd.course_type = Some("Webinar".to_string());
        let courses = vec![odd, Course::new("2", Some(CourseType::Parcours))];
        let filters = FilterState {
            course_type: vec!["Webinar".to_string(), "Parcours".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&run(&courses, &filters, "", &[])), vec!["2"]);
    }

    #[test]
    fn test_search_checks_all_translations_and_fields() {
        let mut course = make_course("1", None, "Introduction");
        course.translations.push(CourseTranslation {
            languages_code: "en".to_string(),
            subtitle: Some("Learn Rust Quickly".to_string()),
            ..Default::default()
        });
        let courses = vec![course, make_course("2", None, "Cuisine")];
        let filters = FilterState::default();

        assert_eq!(ids(&run(&courses, &filters, "  rust ", &[])), vec!["1"]);
        assert_eq!(ids(&run(&courses, &filters, "CUIS", &[])), vec!["2"]);
        assert!(run(&courses, &filters, "absent", &[]).is_empty());
    }

    #[test]
    fn test_filter_by_competence() {
        let mut tagged = Course::new("1", None);
        tagged.competences = Some(vec![CompetenceLink::to(Competence::new(
            "20",
            ParentRef::Parent("2".to_string()),
        ))]);
        let courses = vec![tagged, Course::new("2", None)];
        let filters = FilterState {
            competences: vec!["2".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&run(&courses, &filters, "", &[])), vec!["1"]);
    }

    #[test]
    fn test_bookmarked_only() {
        let courses = vec![Course::new("1", None), Course::new("2", None), Course::new("3", None)];
        let filters = FilterState {
            show_bookmarked: true,
            ..Default::default()
        };
        let bookmarks = vec!["3".to_string(), "1".to_string()];
        assert_eq!(ids(&run(&courses, &filters, "", &bookmarks)), vec!["1", "3"]);
    }

    #[test]
    fn test_hide_completed_is_a_no_op() {
        let courses = vec![Course::new("1", None), Course::new("2", None)];
        let filters = FilterState {
            hide_completed: true,
            ..Default::default()
        };
        assert_eq!(run(&courses, &filters, "", &[]), courses);
        assert!(has_active_filters(&filters, ""));
    }

    #[test]
    fn test_has_active_filters() {
        let mut filters = FilterState::default();
        assert!(has_active_filters(&filters, "x"));
        filters.competences.push("1".to_string());
        assert!(has_active_filters(&filters, ""));
        filters.competences.clear();
        filters.show_bookmarked = true;
        assert!(has_active_filters(&filters, ""));
    }
}
