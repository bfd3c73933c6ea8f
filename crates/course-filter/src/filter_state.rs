//! Filter State Store
//!
//! Current filter selection and its Directus projection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::predicate::build_remote_filter_predicate;

/// User's current search/type/competence/bookmark selection.
///
/// An empty list means "no constraint" on that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub search: Option<String>,
    /// Raw course type values; unrecognised ones are dropped at query time
    #[serde(default)]
    pub course_type: Vec<String>,
    /// Selected top-level competence ids
    #[serde(default)]
    pub competences: Vec<String>,
    #[serde(default)]
    pub show_bookmarked: bool,
    #[serde(default)]
    pub hide_completed: bool,
}

impl FilterState {
    pub fn set_search(&mut self, query: &str) {
        self.search = if query.is_empty() { None } else { Some(query.to_string()) };
    }

    pub fn toggle_course_type(&mut self, value: &str) {
        toggle(&mut self.course_type, value);
    }

    pub fn toggle_competence(&mut self, id: &str) {
        toggle(&mut self.competences, id);
    }

    /// Drop every constraint
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

/// Holder of the current [`FilterState`]
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    pub fn new(state: FilterState) -> Self {
        Self { state }
    }

    pub fn filters(&self) -> &FilterState {
        &self.state
    }

    /// Replace the state wholesale. No validation is performed.
    pub fn set_filters(&mut self, state: FilterState) {
        log::debug!(target: "filters", "set filters: {:?}", state);
        self.state = state;
    }

    /// Directus `filter` object for the current state
    pub fn directus_filters(&self) -> Value {
        build_remote_filter_predicate(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_filters_replaces_wholesale() {
        let mut store = FilterStore::new(FilterState {
            course_type: vec!["Formation".to_string()],
            show_bookmarked: true,
            ..Default::default()
        });
        store.set_filters(FilterState {
            competences: vec!["3".to_string()],
            ..Default::default()
        });
        assert!(store.filters().course_type.is_empty());
        assert!(!store.filters().show_bookmarked);
        assert_eq!(store.filters().competences, vec!["3".to_string()]);
    }

    #[test]
    fn test_invalid_type_kept_until_query() {
        let mut store = FilterStore::default();
        store.set_filters(FilterState {
            course_type: vec!["Webinar".to_string()],
            ..Default::default()
        });
        assert_eq!(store.filters().course_type, vec!["Webinar".to_string()]);
        assert_eq!(store.directus_filters(), json!({ "status": { "_eq": "published" } }));
    }

    #[test]
    fn test_toggles() {
        let mut state = FilterState::default();
        state.toggle_competence("1");
        state.toggle_competence("2");
        state.toggle_competence("1");
        assert_eq!(state.competences, vec!["2".to_string()]);

        state.toggle_course_type("Parcours");
        assert_eq!(state.course_type, vec!["Parcours".to_string()]);

        state.set_search("rust");
        assert_eq!(state.search.as_deref(), Some("rust"));
        state.set_search("");
        assert!(state.search.is_none());

        state.clear();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_camel_case_serialization() {
        let state: FilterState = serde_json::from_value(json!({
            "courseType": ["Formation"],
            "showBookmarked": true
        }))
        .unwrap();
        assert_eq!(state.course_type, vec!["Formation".to_string()]);
        assert!(state.show_bookmarked);
        assert!(!state.hide_completed);
    }
}
