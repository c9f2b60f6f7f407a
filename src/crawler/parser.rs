//! HTML parser for extracting visible text and raw links
//!
//! This module turns a page body into:
//! - Whitespace-collapsed visible text
//! - The raw `href` values of anchors in the content area
//!
//! Non-content subtrees (scripts, styles, navigation, page headers and
//! footers, asides, forms, frames) are skipped entirely, so neither their
//! text nor their links are reported. Parsing is lenient: malformed markup
//! still yields best-effort output.

use scraper::{ElementRef, Html};

/// Elements whose whole subtree is ignored
pub const EXCLUDED_ELEMENTS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "form", "iframe", "noscript",
];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Visible text with all whitespace runs collapsed to a single space
    pub text: String,

    /// Trimmed `href` values of `<a>` elements, in document order
    pub hrefs: Vec<String>,
}

/// Parses HTML content and extracts text and links
///
/// # Example
///
/// ```
/// use site_sieve::crawler::extract_page;
///
/// let html = r#"<html><body><nav><a href="/menu">Menu</a></nav>
///     <p>Hello   <b>world</b></p><a href="/next">Next</a></body></html>"#;
/// let page = extract_page(html);
/// assert_eq!(page.text, "Hello world Next");
/// assert_eq!(page.hrefs, vec!["/next".to_string()]);
/// ```
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let mut fragments = Vec::new();
    let mut hrefs = Vec::new();
    walk(document.root_element(), &mut fragments, &mut hrefs);

    ExtractedPage {
        text: normalize_whitespace(&fragments.join(" ")),
        hrefs,
    }
}

/// Collects text nodes and anchor hrefs below `element`, skipping excluded subtrees
fn walk<'a>(element: ElementRef<'a>, fragments: &mut Vec<&'a str>, hrefs: &mut Vec<String>) {
    if element.value().name() == "a" {
        if let Some(href) = element.value().attr("href") {
            hrefs.push(href.trim().to_string());
        }
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if EXCLUDED_ELEMENTS.contains(&child_element.value().name()) {
                continue;
            }
            walk(child_element, fragments, hrefs);
        } else if let Some(text) = child.value().as_text() {
            fragments.push(text);
        }
    }
}

/// Collapses every run of whitespace into one space and trims both ends
///
/// # Example
///
/// ```
/// use site_sieve::crawler::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a\n\t b  "), "a b");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
