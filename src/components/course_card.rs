//! Course Card Component
//!
//! Title, type, duration and description excerpt of one course.

use leptos::prelude::*;

use course_filter::Course;

use crate::components::BookmarkButton;
use crate::context::use_app_context;
use crate::markdown::{excerpt, parse_markdown};

/// Characters shown before the description is folded
const EXCERPT_CHARS: usize = 160;

#[component]
pub fn CourseCard(course: Course, #[prop(optional, into)] weekly: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let locale = ctx.locale();
    let (expanded, set_expanded) = signal(false);

    let title = course.title(&locale).to_string();
    let subtitle = course.subtitle(&locale).map(str::to_string);
    let description = course.description(&locale).unwrap_or_default().to_string();
    let short = excerpt(&description, EXCERPT_CHARS);
    let full = parse_markdown(&description);
    let kind = course.kind().map(|k| k.as_str());
    let duration = course.duration.clone();
    let card_class = move || if weekly.get() { "course-card weekly" } else { "course-card" };

    view! {
        <article class=card_class>
            <header class="course-card-header">
                <Show when=move || weekly.get()>
                    <span class="weekly-badge">"Formation de la semaine"</span>
                </Show>
                {kind.map(|k| view! { <span class="course-type-badge">{k}</span> })}
                <BookmarkButton course_id=course.id.clone() />
            </header>
            <h2 class="course-title">{title}</h2>
            {subtitle.map(|s| view! { <p class="course-subtitle">{s}</p> })}
            {duration.map(|d| view! { <span class="course-duration">{d}</span> })}
            <div
                class="course-description"
                on:click=move |_| set_expanded.update(|v| *v = !*v)
            >
                {move || if expanded.get() {
                    view! { <div class="markdown" inner_html=full.clone()></div> }.into_any()
                } else {
                    view! { <p class="excerpt">{short.clone()}</p> }.into_any()
                }}
            </div>
        </article>
    }
}
