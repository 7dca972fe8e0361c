//! Main-content extraction.
//!
//! Readability picks and cleans the node holding the article body, resolving
//! its relative links against the page URL. The cleaned markup is then read
//! back one paragraph per block element.

use crate::parsers::text::{join_paragraphs, normalize_whitespace};
use readability::extractor;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Elements whose text starts and ends a paragraph of output
const BLOCK_TAGS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "blockquote",
    "pre",
    "dd",
    "dt",
    "figcaption",
    "div",
    "section",
    "article",
    "main",
    "ul",
    "ol",
    "br",
];

/// Subtrees that never contribute text
const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "iframe", "svg",
    "table", "template",
];

static MAIN_LANDMARK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main, [role=main]").expect("static landmark selector"));

/// Runs main-content extraction over raw markup.
///
/// Returns `None` when readability finds no scored content node, or when the
/// node it picks holds no text.
pub fn extract_main_text(html: &str, url: &str) -> Option<String> {
    let page_url = Url::parse(url).ok()?;

    let product = match extractor::extract(&mut html.as_bytes(), &page_url) {
        Ok(product) => product,
        Err(e) => {
            ::log::debug!("Readability failed for {}: {}", url, e);
            return None;
        }
    };

    // With no scored candidate the whole document comes back, chrome included
    if product.content.contains("<body") {
        ::log::trace!("No main content node found for {}", url);
        return None;
    }

    let content = Html::parse_fragment(&product.content);
    let mut paragraphs = collect_paragraphs(content.root_element());

    if let Some(landmark) = enclosing_landmark(html, &paragraphs) {
        ::log::trace!("Reading the whole main landmark of {}", url);
        paragraphs = landmark;
    }

    let text = join_paragraphs(&paragraphs);
    if text.is_empty() { None } else { Some(text) }
}

/// Paragraphs of the page's main landmark, when it holds more text than was
/// extracted and every extracted paragraph lies inside it.
///
/// Readability scores a single `article` card above the region listing it,
/// so card-based pages would otherwise yield one card.
fn enclosing_landmark(html: &str, extracted: &[String]) -> Option<Vec<String>> {
    let doc = Html::parse_document(html);
    let landmark = doc.select(&MAIN_LANDMARK).next()?;
    let paragraphs = collect_paragraphs(landmark);

    let landmark_text = squash(&paragraphs.concat());
    let extracted_text = squash(&extracted.concat());
    if landmark_text.len() <= extracted_text.len() {
        return None;
    }

    extracted
        .iter()
        .all(|paragraph| landmark_text.contains(&squash(paragraph)))
        .then_some(paragraphs)
}

/// Drops all whitespace so texts compare regardless of inline spacing
fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Reads the text under `root` into normalized paragraphs, one per block element
fn collect_paragraphs(root: ElementRef<'_>) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    walk(root, &mut current, &mut paragraphs);
    flush(&mut current, &mut paragraphs);
    paragraphs
}

fn walk(el: ElementRef<'_>, current: &mut String, paragraphs: &mut Vec<String>) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            current.push_str(text);
            continue;
        }
        let Some(child_el) = ElementRef::wrap(child) else {
            continue;
        };

        let name = child_el.value().name();
        if EXCLUDED_TAGS.contains(&name) {
            continue;
        }

        let block = BLOCK_TAGS.contains(&name);
        if block {
            flush(current, paragraphs);
        }
        walk(child_el, current, paragraphs);
        if block {
            flush(current, paragraphs);
        }
    }
}

fn flush(current: &mut String, paragraphs: &mut Vec<String>) {
    let paragraph = normalize_whitespace(current);
    if !paragraph.is_empty() {
        paragraphs.push(paragraph);
    }
    current.clear();
}
