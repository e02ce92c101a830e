// src/specs/paper.rs
//
// Single paper page: title, abstract and the direct PDF link.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::{ABSTRACT_CONTAINER, PDF_LINK_PATTERN, UNKNOWN_TITLE};
use crate::core::html::{href, text_of};
use crate::core::sanitize::normalize_ws;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").expect("title selector"));
static ABSTRACT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(ABSTRACT_CONTAINER).expect("abstract selector"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").expect("p selector"));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).expect("meta selector"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector"));
static PDF_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(PDF_LINK_PATTERN).expect("pdf link pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperPage {
    pub title: String,
    pub abstract_text: String,
    pub pdf_url: Option<String>,
}

pub fn extract_paper(doc: &Html) -> PaperPage {
    PaperPage {
        title: extract_title(doc),
        abstract_text: extract_abstract(doc),
        pdf_url: find_pdf_link(doc),
    }
}

/// `<title>` text after the first colon ("SmallSat 2025: Title" → "Title").
pub fn extract_title(doc: &Html) -> String {
    let Some(raw) = doc.select(&TITLE).next().map(text_of).filter(|t| !t.is_empty()) else {
        return s!(UNKNOWN_TITLE);
    };
    match raw.split_once(':') {
        Some((_, rest)) => s!(rest.trim()),
        None => s!(raw.trim()),
    }
}

/// First match wins: abstract paragraph, abstract container, meta description.
pub fn extract_abstract(doc: &Html) -> String {
    if let Some(container) = doc.select(&ABSTRACT).next() {
        return match container.select(&PARAGRAPH).next() {
            Some(p) => text_of(p),
            None => text_of(container),
        };
    }
    doc.select(&META_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(normalize_ws)
        .unwrap_or_default()
}

pub fn find_pdf_link(doc: &Html) -> Option<String> {
    doc.select(&ANCHOR)
        .filter_map(href)
        .find(|h| PDF_LINK.is_match(h))
        .map(|h| s!(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(head: &str, body: &str) -> Html {
        Html::parse_document(&format!("<html><head>{head}</head><body>{body}</body></html>"))
    }

    #[test]
    fn title_after_first_colon() {
        let doc = page("<title>SmallSat 2025: My Great Paper</title>", "");
        assert_eq!(extract_title(&doc), "My Great Paper");
    }

    #[test]
    fn title_keeps_later_colons() {
        let doc = page("<title>SmallSat 2025: Part One: The Bus</title>", "");
        assert_eq!(extract_title(&doc), "Part One: The Bus");
    }

    #[test]
    fn title_without_colon_is_whole_text() {
        let doc = page("<title>  NoColonTitle </title>", "");
        assert_eq!(extract_title(&doc), "NoColonTitle");
    }

    #[test]
    fn missing_title_is_sentinel() {
        let doc = page("", "<p>no title</p>");
        assert_eq!(extract_title(&doc), "UnknownTitle");
        let empty = page("<title> </title>", "");
        assert_eq!(extract_title(&empty), "UnknownTitle");
    }

    #[test]
    fn abstract_container_beats_meta() {
        let doc = page(
            r#"<meta name="description" content="From meta">"#,
            r#"<div id="abstract"><h4>Abstract</h4><p>First   para.</p><p>Second.</p></div>"#,
        );
        assert_eq!(extract_abstract(&doc), "First para.");
    }

    #[test]
    fn abstract_container_without_paragraph_uses_its_text() {
        let doc = page(
            r#"<meta name="description" content="From meta">"#,
            r#"<div id="abstract">Plain <b>text</b> abstract</div>"#,
        );
        assert_eq!(extract_abstract(&doc), "Plain text abstract");
    }

    #[test]
    fn abstract_falls_back_to_meta_then_empty() {
        let doc = page(r#"<meta name="description" content=" From  meta ">"#, "");
        assert_eq!(extract_abstract(&doc), "From meta");
        let bare = page("", "<p>unrelated</p>");
        assert_eq!(extract_abstract(&bare), "");
    }

    #[test]
    fn pdf_link_matches_viewcontent_only() {
        let doc = page(
            "",
            r#"<a href="https://digitalcommons.usu.edu/smallsat/2025/all2025/3">Back</a>
               <a href="https://digitalcommons.usu.edu/cgi/viewcontent.cgi?article=6123&amp;context=smallsat">Download</a>
               <a href="https://digitalcommons.usu.edu/cgi/viewcontent.cgi?article=1&amp;context=smallsat">Other</a>"#,
        );
        assert_eq!(
            find_pdf_link(&doc).as_deref(),
            Some("https://digitalcommons.usu.edu/cgi/viewcontent.cgi?article=6123&context=smallsat")
        );
        assert_eq!(find_pdf_link(&page("", "<a href=\"/x.pdf\">x</a>")), None);
    }

    #[test]
    fn extract_paper_combines_fields() {
        let doc = page(
            "<title>SmallSat 2025: Swarm Ops</title>",
            r#"<div id="abstract"><p>We fly many.</p></div>
               <a href="https://digitalcommons.usu.edu/cgi/viewcontent.cgi?article=42&amp;context=smallsat">PDF</a>"#,
        );
        let paper = extract_paper(&doc);
        assert_eq!(paper.title, "Swarm Ops");
        assert_eq!(paper.abstract_text, "We fly many.");
        assert!(paper.pdf_url.is_some());
    }
}
