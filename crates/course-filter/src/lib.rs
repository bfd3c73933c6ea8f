//! Course Filter
//!
//! Filtering, search and ordering core of the course catalog:
//! - models: Directus course/competence entities
//! - competence: competence matcher and per-competence counts
//! - filter / predicate: client-side filtering and the remote Directus filter
//! - filter_state: current filter selection
//! - weekly: course-of-the-week positioning
//! - page_state: listing page reducer
//! - bookmarks: bookmark persistence over an injected key/value storage

pub mod bookmarks;
pub mod competence;
pub mod config;
pub mod error;
pub mod filter;
pub mod filter_state;
pub mod models;
pub mod page_state;
pub mod predicate;
pub mod query;
pub mod weekly;

pub use bookmarks::{get_bookmarks, save_bookmarks, toggle_bookmark, KeyValueStorage, MemoryStorage, BOOKMARKS_KEY};
pub use competence::{collect_competence_ids, count_courses_by_competence, extract_effective_competence_id, matches_filter};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use filter::{filter_courses, has_active_filters, FilterRequest};
pub use filter_state::{FilterState, FilterStore};
pub use models::{Competence, CompetenceLink, Course, CourseType, ParentRef};
pub use page_state::{PageAction, PageError, PageState, PageStatePatch};
pub use predicate::build_remote_filter_predicate;
pub use query::DirectusQuery;
pub use weekly::{featured_weekly_id, is_weekly_visible, position_weekly_course};
