//! Weekly Course Positioning
//!
//! Pins the course of the week to the front of a filtered list when the
//! current filters allow it.

use crate::competence::matches_filter;
use crate::filter_state::FilterState;
use crate::models::Course;

/// Whether the weekly course should be shown under `filters`.
///
/// `hide_completed` is never consulted.
pub fn is_weekly_visible(weekly: &Course, filters: &FilterState) -> bool {
    let no_type = filters.course_type.is_empty();
    let no_competence = filters.competences.is_empty();

    // Unfiltered, or bookmark-only: a bookmark-filtered list is trusted as is
    if no_type && no_competence {
        return true;
    }

    let type_ok = no_type
        || weekly
            .kind()
            .is_some_and(|kind| filters.course_type.iter().any(|v| v == kind.as_str()));
    let competence_ok = no_competence || matches_filter(weekly, &filters.competences);
    type_ok && competence_ok
}

/// Move (or insert) the weekly course at index 0.
///
/// Other courses keep their relative order. Applying this twice is the
/// same as applying it once.
pub fn position_weekly_course(mut courses: Vec<Course>, weekly: Option<&Course>, filters: &FilterState) -> Vec<Course> {
    let Some(weekly) = weekly else {
        return courses;
    };
    if !is_weekly_visible(weekly, filters) {
        log::debug!(target: "weekly", "weekly course {} hidden by filters", weekly.id);
        return courses;
    }

    match courses.iter().position(|c| c.id == weekly.id) {
        Some(0) => {}
        Some(index) => {
            let pinned = courses.remove(index);
            courses.insert(0, pinned);
        }
        None => courses.insert(0, weekly.clone()),
    }
    courses
}

/// Id of the weekly course when it is actually pinned at the head of `courses`
pub fn featured_weekly_id<'a>(courses: &[Course], weekly: Option<&'a Course>, filters: &FilterState) -> Option<&'a str> {
    let weekly = weekly?;
    let pinned = courses.first().is_some_and(|first| first.id == weekly.id);
    (pinned && is_weekly_visible(weekly, filters)).then_some(weekly.id.as_str())
}
