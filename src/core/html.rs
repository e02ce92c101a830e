// src/core/html.rs
use scraper::ElementRef;

use super::sanitize::normalize_ws;

/// All text under `el`, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c.eq_ignore_ascii_case(class))
}

pub fn href(el: ElementRef<'_>) -> Option<&str> {
    el.value().attr("href")
}
