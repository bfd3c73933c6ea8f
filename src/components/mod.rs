//! UI Components
//!
//! Leptos components of the course listing page.

mod bookmark_button;
mod competence_filter;
mod course_card;
mod course_list;
mod filter_sidebar;
mod page_status;
mod search_bar;
mod type_selector;

pub use bookmark_button::BookmarkButton;
pub use competence_filter::CompetenceFilter;
pub use course_card::CourseCard;
pub use course_list::CourseList;
pub use filter_sidebar::FilterSidebar;
pub use page_status::PageStatus;
pub use search_bar::SearchBar;
pub use type_selector::TypeSelector;
