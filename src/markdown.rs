//! Course Description Markdown
//!
//! Renders CMS descriptions with pulldown-cmark. Raw HTML from the CMS is
//! escaped rather than passed through.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options
}

/// Parse markdown into HTML
pub fn parse_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(CowStr::from(html.into_string())),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Plain-text excerpt for cards: first paragraph, cut at `max_chars`
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let first = text.split("\n\n").next().unwrap_or_default().trim();
    let plain: String = Parser::new(first)
        .filter_map(|event| match event {
            Event::Text(t) | Event::Code(t) => Some(t.into_string()),
            Event::SoftBreak | Event::HardBreak => Some(" ".to_string()),
            _ => None,
        })
        .collect();
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let cut: String = plain.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markdown() {
        assert_eq!(parse_markdown("**Rust** basics"), "<p><strong>Rust</strong> basics</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("Learn *fast*\n\nSecond paragraph", 50), "Learn fast");
        assert_eq!(excerpt("abcdefghij", 4), "abcd…");
        assert_eq!(excerpt("", 10), "");
    }
}
