//! Page State Reducer
//!
//! State machine behind the course listing page.

use crate::models::Course;

/// Error shown by the listing page.
///
/// A generic error and an API failure cannot be set at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageError {
    #[default]
    None,
    Generic(String),
    /// The content API could not be reached or answered badly
    ApiFailure,
}

/// Listing page state
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub courses: Vec<Course>,
    pub weekly_course: Option<Course>,
    pub loading: bool,
    pub sidebar_open: bool,
    pub error: PageError,
    pub first_load_done: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            weekly_course: None,
            loading: true,
            sidebar_open: false,
            error: PageError::None,
            first_load_done: false,
        }
    }
}

/// Partial state merged by [`PageAction::Reset`]
#[derive(Debug, Clone, Default)]
pub struct PageStatePatch {
    pub courses: Option<Vec<Course>>,
    pub weekly_course: Option<Option<Course>>,
    pub loading: Option<bool>,
    pub sidebar_open: Option<bool>,
    pub error: Option<PageError>,
    pub first_load_done: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum PageAction {
    SetCourses(Vec<Course>),
    SetWeeklyCourse(Option<Course>),
    SetLoading(bool),
    SetSidebarOpen(bool),
    ToggleSidebar,
    /// `None` clears a generic error and leaves an API failure alone
    SetError(Option<String>),
    SetApiFailure(bool),
    ClearErrors,
    SetFirstLoadDone(bool),
    Reset(PageStatePatch),
}

impl PageState {
    /// Initial state with `patch` merged over the defaults
    pub fn with_patch(patch: PageStatePatch) -> Self {
        let mut state = Self::default();
        state.reduce(PageAction::Reset(patch));
        state
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.error {
            PageError::Generic(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn api_failure(&self) -> bool {
        self.error == PageError::ApiFailure
    }

    pub fn reduce(&mut self, action: PageAction) {
        match action {
            PageAction::SetCourses(courses) => self.courses = courses,
            PageAction::SetWeeklyCourse(weekly) => self.weekly_course = weekly,
            PageAction::SetLoading(loading) => self.loading = loading,
            PageAction::SetSidebarOpen(open) => self.sidebar_open = open,
            PageAction::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            PageAction::SetError(Some(message)) => self.error = PageError::Generic(message),
            PageAction::SetError(None) => {
                if matches!(self.error, PageError::Generic(_)) {
                    self.error = PageError::None;
                }
            }
            PageAction::SetApiFailure(true) => self.error = PageError::ApiFailure,
            PageAction::SetApiFailure(false) => {
                if self.api_failure() {
                    self.error = PageError::None;
                }
            }
            PageAction::ClearErrors => self.error = PageError::None,
            PageAction::SetFirstLoadDone(done) => self.first_load_done = done,
            PageAction::Reset(patch) => self.merge(patch),
        }
    }

    /// Shallow merge: only fields present in `patch` are replaced
    fn merge(&mut self, patch: PageStatePatch) {
        if let Some(courses) = patch.courses {
            self.courses = courses;
        }
        if let Some(weekly) = patch.weekly_course {
            self.weekly_course = weekly;
        }
        if let Some(loading) = patch.loading {
            self.loading = loading;
        }
        if let Some(open) = patch.sidebar_open {
            self.sidebar_open = open;
        }
        if let Some(error) = patch.error {
            self.error = error;
        }
        if let Some(done) = patch.first_load_done {
            self.first_load_done = done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PageState::default();
        assert!(state.loading);
        assert!(!state.sidebar_open);
        assert!(!state.first_load_done);
        assert_eq!(state.error, PageError::None);
        assert!(state.courses.is_empty());
    }

    #[test]
    fn test_errors_are_mutually_exclusive() {
        let mut state = PageState::default();
        state.reduce(PageAction::SetApiFailure(true));
        assert!(state.api_failure());

        state.reduce(PageAction::SetError(Some("boom".to_string())));
        assert_eq!(state.error_message(), Some("boom"));
        assert!(!state.api_failure());

        state.reduce(PageAction::SetApiFailure(true));
        assert!(state.api_failure());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_unsetting_only_touches_its_own_error() {
        let mut state = PageState::default();
        state.reduce(PageAction::SetApiFailure(true));
        state.reduce(PageAction::SetError(None));
        assert!(state.api_failure());

        state.reduce(PageAction::SetApiFailure(false));
        assert_eq!(state.error, PageError::None);

        state.reduce(PageAction::SetError(Some("x".to_string())));
        state.reduce(PageAction::SetApiFailure(false));
        assert_eq!(state.error_message(), Some("x"));
    }

    #[test]
    fn test_clear_errors() {
        let mut state = PageState::default();
        state.reduce(PageAction::SetError(Some("x".to_string())));
        state.reduce(PageAction::ClearErrors);
        assert_eq!(state.error, PageError::None);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = PageState::default();
        state.reduce(PageAction::ToggleSidebar);
        assert!(state.sidebar_open);
        state.reduce(PageAction::ToggleSidebar);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_setters_touch_one_field() {
        let mut state = PageState::default();
        state.reduce(PageAction::SetCourses(vec![Course::new("1", None)]));
        state.reduce(PageAction::SetWeeklyCourse(Some(Course::new("2", None))));
        state.reduce(PageAction::SetLoading(false));
        state.reduce(PageAction::SetFirstLoadDone(true));
        assert_eq!(state.courses.len(), 1);
        assert_eq!(state.weekly_course.as_ref().map(|c| c.id.as_str()), Some("2"));
        assert!(!state.loading);
        assert!(state.first_load_done);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_reset_is_shallow_merge() {
        let mut state = PageState::default();
        state.reduce(PageAction::SetCourses(vec![Course::new("1", None)]));
        state.reduce(PageAction::SetSidebarOpen(true));

        state.reduce(PageAction::Reset(PageStatePatch {
            loading: Some(false),
            weekly_course: Some(None),
            ..Default::default()
        }));
        assert_eq!(state.courses.len(), 1);
        assert!(state.sidebar_open);
        assert!(!state.loading);
        assert!(state.weekly_course.is_none());
    }

    #[test]
    fn test_with_patch() {
        let state = PageState::with_patch(PageStatePatch {
            sidebar_open: Some(true),
            ..Default::default()
        });
        assert!(state.sidebar_open);
        assert!(state.loading);
    }
}
